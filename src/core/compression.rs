use serde::Serialize;

/// How much a summary shrank its input, measured in estimated tokens
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct Compression {
    pub(crate) input_tokens: i64,
    pub(crate) output_tokens: i64,
    /// input / output; `None` when the output is empty
    pub(crate) ratio: Option<f64>,
    /// Percent of input tokens removed; `None` when the input is empty
    pub(crate) reduction_percent: Option<f64>,
}

impl Compression {
    pub(crate) fn new(input_tokens: i64, output_tokens: i64) -> Self {
        let ratio = (output_tokens > 0).then(|| input_tokens as f64 / output_tokens as f64);
        let reduction_percent = (input_tokens > 0)
            .then(|| (1.0 - output_tokens as f64 / input_tokens as f64) * 100.0);
        Self {
            input_tokens,
            output_tokens,
            ratio,
            reduction_percent,
        }
    }

    /// "12.50:1", or "n/a" when undefined
    pub(crate) fn ratio_label(&self) -> String {
        match self.ratio {
            Some(r) => format!("{r:.2}:1"),
            None => "n/a".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_and_reduction() {
        let c = Compression::new(1000, 80);
        assert_eq!(c.ratio_label(), "12.50:1");
        assert!((c.reduction_percent.unwrap() - 92.0).abs() < 1e-9);
    }

    #[test]
    fn expansion_gives_negative_reduction() {
        let c = Compression::new(10, 20);
        assert_eq!(c.ratio_label(), "0.50:1");
        assert!((c.reduction_percent.unwrap() + 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_output_has_no_ratio() {
        let c = Compression::new(100, 0);
        assert_eq!(c.ratio, None);
        assert_eq!(c.ratio_label(), "n/a");
        assert_eq!(c.reduction_percent, Some(100.0));
    }

    #[test]
    fn zero_input_has_no_reduction() {
        let c = Compression::new(0, 5);
        assert_eq!(c.reduction_percent, None);
    }
}
