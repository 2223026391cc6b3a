//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod espn_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let espn_error = EspnError::from(json_error);

        match espn_error {
            EspnError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let espn_error = EspnError::from(io_error);

        match espn_error {
            EspnError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u16>().unwrap_err();
        let espn_error = EspnError::from(parse_error);

        match espn_error {
            EspnError::InvalidSeason(_) => (),
            _ => panic!("Expected InvalidSeason error variant"),
        }
    }

    #[test]
    fn test_missing_season_error() {
        let error = EspnError::MissingSeason {
            env_var: "ESPN_FBA_SEASON".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Season not provided"));
        assert!(error_string.contains("ESPN_FBA_SEASON"));
    }

    #[test]
    fn test_missing_field_helper() {
        let error = EspnError::missing("proTeamId");
        assert_eq!(
            error.to_string(),
            "Player data is missing required field: proTeamId"
        );
    }

    #[test]
    fn test_invalid_field_helper() {
        let error = EspnError::invalid("eligibleSlots", "array of integers");
        let error_string = error.to_string();
        assert!(error_string.contains("eligibleSlots"));
        assert!(error_string.contains("array of integers"));
    }

    #[test]
    fn test_unknown_lookup_errors() {
        assert_eq!(
            EspnError::UnknownPosition { id: 99 }.to_string(),
            "Unknown position id: 99"
        );
        assert_eq!(
            EspnError::UnknownProTeam { id: 77 }.to_string(),
            "Unknown pro team id: 77"
        );
    }

    #[test]
    fn test_invalid_date_error() {
        let error = EspnError::InvalidDate {
            field: "expectedReturnDate".to_string(),
            value: "[2024, 13, 40]".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("expectedReturnDate"));
        assert!(error_string.contains("[2024, 13, 40]"));
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let espn_error = EspnError::from(io_error);

        let error_trait: &dyn std::error::Error = &espn_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(EspnError::missing("player"))
        }

        let result = test_function();
        assert!(result.is_err());
        match result.unwrap_err() {
            EspnError::MissingField { field } => assert_eq!(field, "player"),
            _ => panic!("Expected MissingField error"),
        }
    }
}
