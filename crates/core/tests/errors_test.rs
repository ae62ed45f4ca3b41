use slotbook_core::errors::{SlotError, SlotResult};
use slotbook_core::models::slot::{Phase, SlotTime};

#[test]
fn test_slot_error_display() {
    let invalid_hour = SlotError::InvalidHour { hour: 13 };
    let half_specified = SlotError::HalfSpecifiedWindow;
    let inverted = SlotError::InvalidWindow {
        start: SlotTime::new(5, Phase::Pm),
        end: SlotTime::new(9, Phase::Am),
    };
    let invalid_rate = SlotError::InvalidRate { rate: -1.0 };
    let unknown = SlotError::UnknownSlot { index: 42 };
    let unavailable = SlotError::SlotUnavailable {
        slot: SlotTime::new(9, Phase::Am),
    };
    let hidden = SlotError::SlotHidden {
        slot: SlotTime::new(11, Phase::Pm),
    };

    assert_eq!(invalid_hour.to_string(), "Hour out of range: 13 (expected 1..=12)");
    assert_eq!(
        half_specified.to_string(),
        "Visibility window is half-specified: an hour limit needs a matching phase"
    );
    assert_eq!(
        inverted.to_string(),
        "Visibility window start 5 PM does not precede its end 9 AM"
    );
    assert_eq!(invalid_rate.to_string(), "Hourly rate must be positive, got -1");
    assert_eq!(unknown.to_string(), "No slot at index 42");
    assert_eq!(unavailable.to_string(), "Slot 9 AM is unavailable");
    assert_eq!(hidden.to_string(), "Slot 11 PM is outside the visible window");
}

#[test]
fn test_slot_result_alias() {
    let ok: SlotResult<u8> = Ok(7);
    assert_eq!(ok.unwrap(), 7);

    let err: SlotResult<u8> = Err(SlotError::UnknownSlot { index: 99 });
    assert!(err.is_err());
}
