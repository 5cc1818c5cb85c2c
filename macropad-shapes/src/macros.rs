#[allow(unused)]
#[cfg(all(not(test), not(feature = "defmt"), not(feature = "test-utils")))]
#[macro_use]
mod no_defmt {
    macro_rules! debug {
    ($($arg:expr),*) => {{let _ = ($($arg),*);}};
}
}

#[allow(unused)]
#[cfg(all(not(test), feature = "defmt", not(feature = "test-utils")))]
#[macro_use]
mod with_defmt {
    /// Log debug messages. It will call the [defmt::debug] macro.
    ///
    /// When testing on the host `eprintln!` is called instead, so only the debug syntax can be
    /// used; not the [defmt::Formatter] syntax.
    macro_rules! debug {
        ($($arg:expr),*) => {
            ::defmt::debug!($($arg,)*)
        };
    }
}

#[allow(unused)]
#[cfg(any(test, feature = "test-utils"))]
#[macro_use]
mod host {
    macro_rules! debug {
    ($($arg:expr),*) => {{
        extern crate std;
        std::eprintln!("DEBUG: {}",  format_args!($($arg,)*))
    }};
}
}
