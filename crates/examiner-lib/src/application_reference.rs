//! Application reference formatting for downstream reporting systems.

use crate::schema::ApplicationReference;

/// Collapse an application reference into the single positional integer used
/// by downstream systems: the application id followed by the booking
/// sequence zero-padded to two digits, followed by the check digit.
pub fn format_application_reference(application_reference: &ApplicationReference) -> i64 {
    application_reference.application_id * 1_000
        + application_reference.booking_sequence * 10
        + application_reference.check_digit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digit_booking_sequences() {
        let application_reference = ApplicationReference {
            application_id: 1234,
            booking_sequence: 2,
            check_digit: 3,
        };

        assert_eq!(format_application_reference(&application_reference), 1_234_023);
    }

    #[test]
    fn allows_two_digit_booking_sequences() {
        let application_reference = ApplicationReference {
            application_id: 1234,
            booking_sequence: 12,
            check_digit: 3,
        };

        assert_eq!(format_application_reference(&application_reference), 1_234_123);
    }

    #[test]
    fn holds_full_size_application_ids() {
        let application_reference = ApplicationReference {
            application_id: 10_123_433,
            booking_sequence: 1,
            check_digit: 1,
        };

        assert_eq!(
            format_application_reference(&application_reference),
            10_123_433_011
        );
    }
}
