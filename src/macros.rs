//! Variadic logging: `info!(log, "copied", count, "files")` logs every item
//! joined by single spaces.

/// Builds a [`Message`](crate::Message) from a comma-separated list of
/// [`Printable`](crate::Printable) values.
#[macro_export]
macro_rules! message {
    ($($item:expr),+ $(,)?) => {
        $crate::Message::from_items(&[$(&$item as &dyn $crate::Printable),+])
    };
}

#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($item:expr),+ $(,)?) => {
        $logger.verbose($crate::message!($($item),+))
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($item:expr),+ $(,)?) => {
        $logger.debug($crate::message!($($item),+))
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($item:expr),+ $(,)?) => {
        $logger.info($crate::message!($($item),+))
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($item:expr),+ $(,)?) => {
        $logger.warn($crate::message!($($item),+))
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($item:expr),+ $(,)?) => {
        $logger.error($crate::message!($($item),+))
    };
}
