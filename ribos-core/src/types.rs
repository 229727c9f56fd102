use thiserror::Error;

/// Reasons an automaton definition is refused at construction time.
///
/// Every variant that concerns a transition carries the transition rendered
/// as `(origin, input, top) -> (target, push)` so the faulty entry can be
/// located in a large generated table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// The initial state is not a member of the state set
    #[error("initial state {0} is not a declared state")]
    UndeclaredInitialState(String),
    /// At least one final state is not a member of the state set
    #[error("final states {0} are not a subset of the declared states")]
    FinalStatesNotSubset(String),
    /// The bottom-of-stack marker is not part of the stack alphabet
    #[error("initial stack symbol {0} is not in the stack alphabet")]
    UndeclaredInitialStackSymbol(String),
    /// A transition starts from a state outside the state set
    #[error("transition {transition}: origin state {state} is not a declared state")]
    UndeclaredOriginState { transition: String, state: String },
    /// A transition reads a symbol outside the input alphabet
    #[error("transition {transition}: input symbol {symbol} is not in the input alphabet")]
    UndeclaredInputSymbol { transition: String, symbol: String },
    /// A transition expects a stack top outside the stack alphabet
    #[error("transition {transition}: stack top {symbol} is not in the stack alphabet")]
    UndeclaredStackTop { transition: String, symbol: String },
    /// A transition moves to a state outside the state set
    #[error("transition {transition}: target state {state} is not a declared state")]
    UndeclaredTargetState { transition: String, state: String },
    /// A transition pushes symbols outside the stack alphabet
    #[error("transition {transition}: pushed symbols {symbols} are not in the stack alphabet")]
    UndeclaredPushedSymbols { transition: String, symbols: String },
    /// Two different transitions were registered for the same key
    #[error("key {key} maps to both {existing} and {conflicting}")]
    ConflictingTransition {
        key: String,
        existing: String,
        conflicting: String,
    },
    /// A Mealy transition or output refers to a state or symbol that was not declared
    #[error("mapping {mapping}: {reason}")]
    InvalidMapping { mapping: String, reason: String },
}

/// Simulation could not finish in an accepting configuration.
///
/// Both variants point at a broken transition table rather than bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StuckState {
    /// Input was exhausted and no epsilon transition leads on from a non-final state
    #[error("stuck in state {state} with no epsilon transition towards a final state")]
    NoFinalState { state: String },
    /// An epsilon run returned to a configuration it already passed through
    #[error("epsilon transitions cycle through state {state} with stack top {top}")]
    NonTerminatingClosure { state: String, top: String },
}

/// Errors produced by Ribos operations
#[derive(Error, Debug)]
pub enum RibosError {
    /// The automaton or transducer definition violates its invariants
    #[error("Invalid definition: {0}")]
    InvalidDefinition(#[from] DefinitionError),
    /// The simulation cannot terminate in a final state
    #[error("Stuck automaton: {0}")]
    Stuck(#[from] StuckState),
    /// Invalid input sequence format or content
    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),
    /// The transducer has no transition or output for a symbol
    #[error("Undefined transduction: {0}")]
    UndefinedTransduction(String),
    /// A file name contains characters that are not portable
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
    /// The global thread pool could not be configured
    #[error("Thread pool error: {0}")]
    ThreadPoolError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_error_names_transition() {
        let error = DefinitionError::UndeclaredStackTop {
            transition: "(s0, 'A', 'Q') -> (s1, [])".to_string(),
            symbol: "'Q'".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("(s0, 'A', 'Q') -> (s1, [])"));
        assert!(message.contains("stack top 'Q'"));
    }

    #[test]
    fn test_ribos_error_wraps_definition_error() {
        let error: RibosError = DefinitionError::UndeclaredInitialState("q9".to_string()).into();
        assert!(matches!(error, RibosError::InvalidDefinition(_)));
        assert_eq!(
            error.to_string(),
            "Invalid definition: initial state q9 is not a declared state"
        );
    }

    #[test]
    fn test_ribos_error_wraps_stuck_state() {
        let error: RibosError = StuckState::NoFinalState {
            state: "Rollback".to_string(),
        }
        .into();
        assert!(matches!(error, RibosError::Stuck(_)));
        assert!(error.to_string().contains("Rollback"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: RibosError = io.into();
        assert!(matches!(error, RibosError::IoError(_)));
    }
}
