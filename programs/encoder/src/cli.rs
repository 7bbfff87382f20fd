//! Contains the command line interface for the encoder.

use clap::Parser;

/// The command line interface for the group encoder.
#[derive(Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct EncoderCli {
    /// The id of the semaphore group to fetch and encode.
    ///
    /// Optional at the parser level so that a missing id goes through the
    /// validation path with its fixed exit code rather than clap's usage
    /// error.
    pub group_id: Option<String>,
}

impl EncoderCli {
    /// Validates the positional group id. Performs no I/O.
    ///
    /// # Errors
    /// Returns an error if the id is missing or not a base-10 integer.
    pub fn parse_group_id(&self) -> Result<u64, InvalidGroupId> {
        let raw = self.group_id.as_ref().ok_or(InvalidGroupId::Missing)?;
        raw.parse()
            .map_err(|_| InvalidGroupId::NotANumber(raw.clone()))
    }
}

/// The input validation error for the group id argument.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidGroupId {
    /// No positional argument was supplied
    #[error("Please provide a group id")]
    Missing,

    /// The argument is not a base-10 integer
    #[error("group id must be a base-10 integer, got {0:?}")]
    NotANumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_group_id_is_a_validation_error() {
        let cli = EncoderCli::try_parse_from(["group-encoder"]).unwrap();
        assert_eq!(cli.parse_group_id(), Err(InvalidGroupId::Missing));
    }

    #[test]
    fn numeric_group_id_is_accepted() {
        let cli = EncoderCli::try_parse_from(["group-encoder", "42"]).unwrap();
        assert_eq!(cli.parse_group_id(), Ok(42));
    }

    #[test]
    fn non_numeric_group_id_is_a_validation_error() {
        let cli = EncoderCli::try_parse_from(["group-encoder", "g7"]).unwrap();
        assert_eq!(
            cli.parse_group_id(),
            Err(InvalidGroupId::NotANumber("g7".to_string()))
        );
    }

    #[test]
    fn extra_positional_arguments_are_rejected() {
        assert!(EncoderCli::try_parse_from(["group-encoder", "1", "2"]).is_err());
    }
}
