#[macro_export]
macro_rules! emit {
    ($findings:expr, $ctx:expr, $line:expr, $severity:expr, $code:expr, $($msg:tt)+) => {
        $findings.push($crate::types::Finding {
            file: $ctx.file.clone(),
            line: $line,
            severity: $severity,
            code: $code,
            message: format!($($msg)+),
        });
    };
}
