use geohint_derive::geohint_error;
use std::borrow::Cow;

#[geohint_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseFloatError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<f64, DemoError> {
    raw.parse::<f64>().context("Parsing demo value")
}

fn main() {
    let _ = parse("1.5");
}
