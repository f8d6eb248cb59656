//! Diagnostic hook. With `feature = "log_support"` this forwards to [`log::trace!`] under the
//! `posit_codec` target; otherwise it expands to nothing and its arguments are not evaluated.

#[cfg(feature = "log_support")]
macro_rules! trace {
  ($($arg:tt)+) => {
    ::log::trace!(target: "posit_codec", $($arg)+)
  };
}

#[cfg(not(feature = "log_support"))]
macro_rules! trace {
  ($($arg:tt)+) => {{}};
}
