/// Asserts that evaluating the expression panics, optionally checking that the panic message
/// contains the provided fragment.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:expr) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                let _ = $run;
            })).is_err(),
            "expected `{}` to panic",
            stringify!($run),
        );
    };
    ($run:expr, $fragment:literal) => {{
        let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = $run;
        })).expect_err(concat!("expected `", stringify!($run), "` to panic"));

        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();

        assert!(
            message.contains($fragment),
            "panic message {:?} doesn't contain {:?}",
            message,
            $fragment,
        );
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
