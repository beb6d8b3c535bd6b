//! Calculator state and its display message
//!
//! Pure data with no I/O dependencies

/// Shown while a request is in flight
pub const COMPUTING_MESSAGE: &str = "Computing...";

/// Shown before anything has been computed
pub const PROMPT_MESSAGE: &str = "Enter two numbers and press calculate.";

/// Operands and outcome of the most recent submission
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculatorState {
    pub number_a: f64,
    pub number_b: f64,
    pub sum_result: Option<i64>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summary of the state for display, recomputed on every call
    pub fn display_message(&self) -> String {
        if self.is_loading {
            return COMPUTING_MESSAGE.to_string();
        }
        if let Some(error) = &self.error {
            return format!("error: {error}");
        }
        if let Some(sum) = self.sum_result {
            return format!(
                "{} + {} = {}",
                format_number(self.number_a),
                format_number(self.number_b),
                sum
            );
        }
        PROMPT_MESSAGE.to_string()
    }

    /// Enter the loading state, dropping the previous outcome
    pub(crate) fn begin_request(&mut self) {
        self.is_loading = true;
        self.error = None;
        self.sum_result = None;
    }

    /// Record a successful outcome and leave the loading state
    pub(crate) fn settle_ok(&mut self, sum: i64) {
        self.sum_result = Some(sum);
        self.error = None;
        self.is_loading = false;
    }

    /// Record a failed outcome and leave the loading state
    pub(crate) fn settle_err(&mut self, message: String) {
        self.sum_result = None;
        self.error = Some(message);
        self.is_loading = false;
    }

    /// Leave the loading state without an outcome
    pub(crate) fn cancel_request(&mut self) {
        self.is_loading = false;
    }
}

/// Render an operand the way it is shown to users and sent on the wire.
///
/// Integral values drop the fractional part (`2`, not `2.0`) and negative
/// zero prints as `0`. Magnitudes from `1e21` up and below `1e-6` switch to
/// exponent notation with an explicit sign (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value == f64::INFINITY {
        return "Infinity".to_string();
    }
    if value == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }

    value.to_string()
}
