use crate::errors::domain::{DomainError, TransferFailureReason, ValidationKind};
use crate::errors::error_code::ErrorCode;

#[test]
fn validation_errors_map_to_their_kind_code() {
    let err = DomainError::validation(ValidationKind::ReadyLocked, "cannot switch while ready");
    assert_eq!(ErrorCode::from(&err), ErrorCode::ReadyLocked);
    assert_eq!(ErrorCode::from(&err).as_str(), "READY_LOCKED");
}

#[test]
fn transfer_errors_map_to_transfer_codes() {
    let err = DomainError::transfer(
        TransferFailureReason::DifferentTeam,
        "players are on different teams",
    );
    assert_eq!(ErrorCode::from(&err), ErrorCode::TransferDifferentTeam);
    assert_eq!(ErrorCode::from(&err).as_str(), "TRANSFER_DIFFERENT_TEAM");
}

#[test]
fn transfer_reason_codes_are_stable() {
    let cases = [
        (
            TransferFailureReason::AlreadyParticipated,
            "TRANSFER_ALREADY_PARTICIPATED",
        ),
        (
            TransferFailureReason::InsufficientBalance,
            "TRANSFER_INSUFFICIENT_BALANCE",
        ),
        (TransferFailureReason::InvalidUnit, "TRANSFER_INVALID_UNIT"),
        (
            TransferFailureReason::DifferentTeam,
            "TRANSFER_DIFFERENT_TEAM",
        ),
        (TransferFailureReason::Unknown, "TRANSFER_UNKNOWN"),
    ];
    for (reason, code) in cases {
        assert_eq!(ErrorCode::from(reason).as_str(), code);
    }
}

#[test]
fn cause_accessors_are_category_exclusive() {
    let validation = DomainError::validation(ValidationKind::NotHost, "not the host");
    assert_eq!(validation.validation_kind(), Some(ValidationKind::NotHost));
    assert_eq!(validation.transfer_reason(), None);

    let transfer = DomainError::transfer(TransferFailureReason::InvalidUnit, "not a 100 unit");
    assert_eq!(transfer.validation_kind(), None);
    assert_eq!(
        transfer.transfer_reason(),
        Some(TransferFailureReason::InvalidUnit)
    );
}

#[test]
fn display_carries_the_detail_message() {
    let err = DomainError::validation(ValidationKind::LobbyFull, "lobby holds 4 players");
    let rendered = err.to_string();
    assert!(rendered.contains("lobby holds 4 players"));
}
