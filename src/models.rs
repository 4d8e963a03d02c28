use chrono::NaiveDate;
use serde::Serialize;

/// One person's birth date as known within one specific chat.
///
/// The same user may have a different stored date in each chat; the
/// (chat_id, user_id) pair is unique. The date always lives in the
/// reference year, so only its month and day carry meaning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Birthday {
    pub chat_id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// Read projection for outward notification: who to congratulate where,
/// with the display name already rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayPerson {
    pub chat_id: i64,
    pub user_id: i64,
    pub name: String,
}
