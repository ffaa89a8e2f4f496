//! Client-side calculator session model.
//!
//! The keypad input mode is an explicit four-state machine rather than a set
//! of boolean flags, so every keypress transition is auditable and testable.
//! The session also keeps the transient calculation history: an append-only,
//! insertion-ordered list of past requests held only for display.
//!
//! Pre-submit validation runs here through the same
//! [`crate::domain::validation`] rules the server applies; the server stays
//! authoritative and re-validates every request.

use time::OffsetDateTime;

use crate::domain::display::format_result;
use crate::domain::ops::{BinaryOp, UnaryOp};
use crate::domain::validation::{validate_binary, validate_unary, Finding};

/// Keypad input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Nothing typed yet (initial state, or after clear / an error).
    FreshEntry,
    /// Digits of the current operand are being typed.
    AccumulatingDigits,
    /// An operator was pressed; the next digit starts the second operand.
    AwaitingSecondOperand,
    /// A result is on display; the next digit starts a new calculation.
    JustCalculated,
}

/// One past calculation, kept only for display.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub operation: &'static str,
    pub inputs: Vec<String>,
    pub outcome: Result<String, String>,
    pub timestamp: OffsetDateTime,
}

/// A single calculator session. Not shared; one per UI instance.
#[derive(Debug)]
pub struct Session {
    mode: InputMode,
    entry: String,
    first: Option<String>,
    pending_op: Option<BinaryOp>,
    history: Vec<HistoryEntry>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            mode: InputMode::FreshEntry,
            entry: "0".to_string(),
            first: None,
            pending_op: None,
            history: Vec::new(),
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Text currently on the display.
    pub fn display(&self) -> &str {
        &self.entry
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Press a digit key (`'0'..='9'`). Non-digits are ignored.
    pub fn press_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        match self.mode {
            InputMode::FreshEntry | InputMode::AwaitingSecondOperand => {
                self.entry = digit.to_string();
                self.mode = InputMode::AccumulatingDigits;
            }
            InputMode::AccumulatingDigits => {
                // Avoid leading-zero runs like "007".
                if self.entry == "0" {
                    self.entry = digit.to_string();
                } else {
                    self.entry.push(digit);
                }
            }
            InputMode::JustCalculated => {
                // A digit after a result starts a new calculation.
                self.first = None;
                self.pending_op = None;
                self.entry = digit.to_string();
                self.mode = InputMode::AccumulatingDigits;
            }
        }
    }

    /// Press the decimal point key. At most one point per operand.
    pub fn press_decimal_point(&mut self) {
        match self.mode {
            InputMode::FreshEntry | InputMode::AwaitingSecondOperand => {
                self.entry = "0.".to_string();
                self.mode = InputMode::AccumulatingDigits;
            }
            InputMode::AccumulatingDigits => {
                if !self.entry.contains('.') {
                    self.entry.push('.');
                }
            }
            InputMode::JustCalculated => {
                self.first = None;
                self.pending_op = None;
                self.entry = "0.".to_string();
                self.mode = InputMode::AccumulatingDigits;
            }
        }
    }

    /// Press a binary operator key.
    ///
    /// If a full pair is already staged (chained input like `1 + 2 +`), the
    /// staged pair is evaluated first and its result becomes the new first
    /// operand.
    pub fn press_operator(&mut self, op: BinaryOp) {
        if self.pending_op.is_some() && self.mode == InputMode::AccumulatingDigits {
            self.press_equals();
        }
        self.first = Some(self.entry.clone());
        self.pending_op = Some(op);
        self.mode = InputMode::AwaitingSecondOperand;
    }

    /// Press a unary operation key. Applies to the current display value.
    pub fn press_unary(&mut self, op: UnaryOp) {
        let raw = self.entry.clone();
        let findings = validate_unary(op, &raw);
        let outcome = if let Some(message) = first_blocking(&findings) {
            Err(message)
        } else {
            match raw.trim().parse::<f64>() {
                Ok(a) => op.evaluate(a).map(format_result).map_err(|e| e.to_string()),
                Err(_) => Err("a must be a valid number".to_string()),
            }
        };
        self.record(op.name(), vec![raw], outcome);
    }

    /// Press the equals key. No-op unless an operator and both operands are
    /// staged.
    pub fn press_equals(&mut self) {
        let (Some(op), Some(first)) = (self.pending_op, self.first.clone()) else {
            return;
        };
        if self.mode == InputMode::AwaitingSecondOperand {
            return;
        }
        let second = self.entry.clone();
        let findings = validate_binary(op, &first, &second);
        let outcome = if let Some(message) = first_blocking(&findings) {
            Err(message)
        } else {
            match (first.trim().parse::<f64>(), second.trim().parse::<f64>()) {
                (Ok(a), Ok(b)) => op
                    .evaluate(a, b)
                    .map(format_result)
                    .map_err(|e| e.to_string()),
                _ => Err("operands must be valid numbers".to_string()),
            }
        };
        self.record(op.name(), vec![first, second], outcome);
        self.first = None;
        self.pending_op = None;
    }

    /// Press the clear key: back to the initial state. History survives.
    pub fn clear(&mut self) {
        self.mode = InputMode::FreshEntry;
        self.entry = "0".to_string();
        self.first = None;
        self.pending_op = None;
    }

    fn record(
        &mut self,
        operation: &'static str,
        inputs: Vec<String>,
        outcome: Result<String, String>,
    ) {
        match &outcome {
            Ok(result) => {
                self.entry = result.clone();
                self.mode = InputMode::JustCalculated;
            }
            Err(_) => {
                // Errors reset the entry; the message lives in the history.
                self.entry = "0".to_string();
                self.mode = InputMode::FreshEntry;
            }
        }
        self.history.push(HistoryEntry {
            operation,
            inputs,
            outcome,
            timestamp: OffsetDateTime::now_utc(),
        });
    }
}

fn first_blocking(findings: &[Finding]) -> Option<String> {
    findings
        .iter()
        .find(|f| f.is_blocking())
        .map(|f| f.message.clone())
}
