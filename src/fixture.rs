//! Locating the fixture user inside a page of the user list.
//!
//! The service numbers users sequentially from 1, so on page `p` with
//! `n` records per page the user with id `i` sits at offset
//! `i - n * (p - 1) - 1`. The record found there is checked against the
//! requested id so that a renumbered data set fails loudly instead of
//! comparing against the wrong user.

use thiserror::Error;

use crate::models::{UserListPage, UserRecord};

/// Errors from the fixture index calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// The target id lies on an earlier page
    #[error("Negative offset: user {target_id} maps to offset {offset}, before the first record of the page")]
    NegativeOffset { target_id: i64, offset: i128 },

    /// The computed offset is past the last record on the page
    #[error("Index out of range: user {target_id} maps to offset {offset}, page holds {len} records")]
    IndexOutOfRange {
        target_id: i64,
        offset: usize,
        len: usize,
    },

    /// `page` or `per_page` is below 1
    #[error("Invalid pagination: page {page}, per_page {per_page}")]
    InvalidPagination { page: i64, per_page: i64 },

    /// The record at the computed offset belongs to another user
    #[error("Id mismatch: expected user {target_id} at offset {offset}, found user {found}")]
    IdMismatch {
        target_id: i64,
        offset: usize,
        found: i64,
    },
}

/// Computes the zero-based offset of `target_id` on `page`.
///
/// Only the lower bound can be checked here; the caller compares the offset
/// with the number of records actually returned.
///
/// # Examples
///
/// ```
/// use reqres_check::fixture::user_offset;
///
/// assert_eq!(user_offset(7, 6, 2).unwrap(), 0);
/// assert_eq!(user_offset(12, 6, 2).unwrap(), 5);
/// assert!(user_offset(3, 6, 2).is_err());
/// ```
pub fn user_offset(target_id: i64, per_page: i64, page: i64) -> Result<usize, FixtureError> {
    if page < 1 || per_page < 1 {
        return Err(FixtureError::InvalidPagination { page, per_page });
    }

    let offset =
        i128::from(target_id) - i128::from(per_page) * (i128::from(page) - 1) - 1;

    usize::try_from(offset).map_err(|_| FixtureError::NegativeOffset { target_id, offset })
}

/// Returns the record for `target_id` from `page`.
///
/// # Errors
///
/// `NegativeOffset` if the id belongs to an earlier page, `IndexOutOfRange`
/// if the offset is past the last record, `IdMismatch` if the record found
/// there has a different id.
pub fn locate_user(page: &UserListPage, target_id: i64) -> Result<&UserRecord, FixtureError> {
    let offset = user_offset(target_id, page.per_page, page.page)?;

    let record = page.data.get(offset).ok_or(FixtureError::IndexOutOfRange {
        target_id,
        offset,
        len: page.data.len(),
    })?;

    if record.id != target_id {
        return Err(FixtureError::IdMismatch {
            target_id,
            offset,
            found: record.id,
        });
    }

    Ok(record)
}
