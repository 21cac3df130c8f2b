use thiserror::Error;

/// Errors surfaced while configuring or constructing a simulation.
/// Per-tick physics never fails; everything here happens before the first tick.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("cannot place {count} non-overlapping bodies in viewport of size {width}x{height} (placed {placed}, gave up after {attempts} attempts)")]
    Placement {
        count: usize,
        placed: usize,
        attempts: u32,
        width: f32,
        height: f32,
    },

    #[error("Failed to parse config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid color {0:?}, expected #rgb or #rrggbb")]
    InvalidColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_message_names_count_and_viewport() {
        let err = SimError::Placement {
            count: 3,
            placed: 1,
            attempts: 100,
            width: 10.0,
            height: 20.0,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("cannot place 3 non-overlapping bodies in viewport of size 10x20"), "{}", msg);
    }

    #[test]
    fn json_errors_convert() {
        let parse: Result<u32, serde_json::Error> = serde_json::from_str("nope");
        let err: SimError = parse.unwrap_err().into();
        assert!(matches!(err, SimError::Config(_)));
    }
}
