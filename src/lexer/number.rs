//! Finite-state machine for numeric literals.
//!
//! Recognizes `[+-]?D+(.D+)?([eE][+-]?D+)?`. The machine always prefers
//! extending the current literal over ending it; a literal that halts in a
//! non-accepting state is malformed.

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NumberState {
    /// Nothing consumed yet.
    Start,
    /// Leading sign consumed.
    Sign,
    /// Digits of the integer part.
    Integer,
    /// Decimal point just consumed.
    Point,
    /// Digits after the decimal point.
    Fraction,
    /// `e` or `E` just consumed.
    ExponentMarker,
    /// Sign after the exponent marker.
    ExponentSign,
    /// Digits of the exponent.
    Exponent,
}

/// What the driver does with the byte under the cursor.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    /// Consume the byte and move to the given state.
    Consume(NumberState),
    /// Leave the byte alone; the literal ends as a valid number.
    Accept,
    /// Leave the byte alone; the literal is malformed.
    Reject,
}

impl NumberState {
    pub const ALL: [NumberState; 8] = [
        NumberState::Start,
        NumberState::Sign,
        NumberState::Integer,
        NumberState::Point,
        NumberState::Fraction,
        NumberState::ExponentMarker,
        NumberState::ExponentSign,
        NumberState::Exponent,
    ];

    pub fn is_accepting(self) -> bool {
        matches!(
            self,
            NumberState::Integer | NumberState::Fraction | NumberState::Exponent
        )
    }

    pub fn transition(self, byte: u8) -> Action {
        use NumberState::*;

        match (self, byte) {
            (Start, b'+' | b'-') => Action::Consume(Sign),
            (Start | Sign, b'0'..=b'9') => Action::Consume(Integer),
            (Integer, b'0'..=b'9') => Action::Consume(Integer),
            (Integer, b'.') => Action::Consume(Point),
            (Integer | Fraction, b'e' | b'E') => Action::Consume(ExponentMarker),
            (Point | Fraction, b'0'..=b'9') => Action::Consume(Fraction),
            (ExponentMarker, b'+' | b'-') => Action::Consume(ExponentSign),
            (ExponentMarker | ExponentSign | Exponent, b'0'..=b'9') => Action::Consume(Exponent),
            (state, _) if state.is_accepting() => Action::Accept,
            _ => Action::Reject,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NumberState::Start => "start",
            NumberState::Sign => "sign",
            NumberState::Integer => "integer",
            NumberState::Point => "decimal point",
            NumberState::Fraction => "fraction",
            NumberState::ExponentMarker => "E",
            NumberState::ExponentSign => "exp sign",
            NumberState::Exponent => "exponent",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NumberScan {
    /// Bytes consumed, including any malformed suffix.
    pub len: usize,
    pub state: NumberState,
}

impl NumberScan {
    pub fn is_valid(&self) -> bool {
        self.state.is_accepting()
    }
}

/// Runs the machine over `input` from its first byte.
///
/// The machine halts at end of input or on the first byte it does not
/// consume. The halting state alone decides validity.
pub fn scan_number(input: &[u8]) -> NumberScan {
    let mut state = NumberState::Start;
    let mut len = 0;

    while let Some(&byte) = input.get(len) {
        match state.transition(byte) {
            Action::Consume(next) => {
                state = next;
                len += 1;
            }
            Action::Accept | Action::Reject => break,
        }
    }

    NumberScan { len, state }
}

/// True when a numeric literal starts at the beginning of `input`: a digit,
/// or a sign immediately followed by a digit.
pub fn starts_number(input: &[u8]) -> bool {
    match input {
        [b'0'..=b'9', ..] => true,
        [b'+' | b'-', b'0'..=b'9', ..] => true,
        _ => false,
    }
}
