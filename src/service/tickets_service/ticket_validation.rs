use crate::error::Error;

///
/// Validates the syntax of an issuance request.
///
/// Missing fields are reported before format problems,
/// in the field order of the request.
///
/// ### Errors
/// - [Error::MissingField] when any field is empty
/// - [Error::InvalidVatinFormat] when vatin is not exactly 11 digits
/// - [Error::InvalidNameFormat] when a name contains anything but letters
///
pub fn validate_ticket_request(
    vatin: &str,
    first_name: &str,
    last_name: &str,
) -> Result<(), Error> {
    if vatin.is_empty() {
        return Err(Error::MissingField("vatin"));
    }
    if first_name.is_empty() {
        return Err(Error::MissingField("firstName"));
    }
    if last_name.is_empty() {
        return Err(Error::MissingField("lastName"));
    }

    if vatin.len() != 11 || !vatin.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidVatinFormat);
    }
    if !first_name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidNameFormat("firstName"));
    }
    if !last_name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidNameFormat("lastName"));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_request() {
        let result = validate_ticket_request("12345678901", "Ana", "Kovac");

        assert!(result.is_ok());
    }

    #[test]
    fn missing_vatin() {
        let result = validate_ticket_request("", "Ana", "Kovac");

        assert!(matches!(result, Err(Error::MissingField("vatin"))));
    }

    #[test]
    fn missing_first_name() {
        let result = validate_ticket_request("12345678901", "", "Kovac");

        assert!(matches!(result, Err(Error::MissingField("firstName"))));
    }

    #[test]
    fn missing_last_name() {
        let result = validate_ticket_request("12345678901", "Ana", "");

        assert!(matches!(result, Err(Error::MissingField("lastName"))));
    }

    #[test]
    fn missing_field_reported_before_format_problems() {
        let result = validate_ticket_request("", "Ana2", "Kovac!");

        assert!(matches!(result, Err(Error::MissingField("vatin"))));
    }

    #[test]
    fn vatin_too_short() {
        let result = validate_ticket_request("123", "Ana", "Kovac");

        assert!(matches!(result, Err(Error::InvalidVatinFormat)));
    }

    #[test]
    fn vatin_too_long() {
        let result = validate_ticket_request("123456789012", "Ana", "Kovac");

        assert!(matches!(result, Err(Error::InvalidVatinFormat)));
    }

    #[test]
    fn vatin_with_letter() {
        let result = validate_ticket_request("1234567890a", "Ana", "Kovac");

        assert!(matches!(result, Err(Error::InvalidVatinFormat)));
    }

    #[test]
    fn vatin_with_space() {
        let result = validate_ticket_request("12345 78901", "Ana", "Kovac");

        assert!(matches!(result, Err(Error::InvalidVatinFormat)));
    }

    #[test]
    fn vatin_independent_of_names() {
        let result = validate_ticket_request("1234567890a", "Ana2", "Kovac!");

        assert!(matches!(result, Err(Error::InvalidVatinFormat)));
    }

    #[test]
    fn first_name_with_digit() {
        let result = validate_ticket_request("12345678901", "Ana2", "Kovac");

        assert!(matches!(result, Err(Error::InvalidNameFormat("firstName"))));
    }

    #[test]
    fn first_name_with_space() {
        let result = validate_ticket_request("12345678901", "Ana Marija", "Kovac");

        assert!(matches!(result, Err(Error::InvalidNameFormat("firstName"))));
    }

    #[test]
    fn last_name_with_punctuation() {
        let result = validate_ticket_request("12345678901", "Ana", "Kovac-Horvat");

        assert!(matches!(result, Err(Error::InvalidNameFormat("lastName"))));
    }
}
