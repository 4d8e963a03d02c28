use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::BotError;
use crate::models::Birthday;
use crate::ports::Repository;
use crate::utils::dates::adjusted_day_of_year;

/// Answers calendar questions over the stored records: what date is on
/// file, who is next, who matches a given day. Comparison happens in
/// adjusted day-of-year space so leap and non-leap years line up.
pub struct BirthdayCalendar {
    repository: Arc<dyn Repository>,
}

impl BirthdayCalendar {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    /// Stored date for one user in one chat; `None` when never set
    pub async fn stored_date(
        &self,
        chat_id: i64,
        user_id: i64,
    ) -> Result<Option<NaiveDate>, BotError> {
        self.repository.get_date(chat_id, user_id).await
    }

    /// The nearest upcoming birthday(s) in a chat, strictly after
    /// `today`. When nothing remains this cycle, wraps around to the
    /// earliest birthday(s) of the next one. Ties are all returned.
    pub async fn upcoming(
        &self,
        chat_id: i64,
        today: NaiveDate,
    ) -> Result<Vec<Birthday>, BotError> {
        let this_cycle = self
            .repository
            .get_upcoming(chat_id, adjusted_day_of_year(today))
            .await?;
        if !this_cycle.is_empty() {
            return Ok(this_cycle);
        }
        self.repository.get_upcoming(chat_id, 0).await
    }

    /// All records across every chat falling on the given calendar date
    pub async fn records_for_date(&self, date: NaiveDate) -> Result<Vec<Birthday>, BotError> {
        self.repository.get_by_calendar_date(date).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::constants::REFERENCE_YEAR;

    /// In-memory stand-in for the Postgres repository
    #[derive(Default)]
    struct MemoryRepository {
        records: Mutex<Vec<Birthday>>,
    }

    impl MemoryRepository {
        fn seed(&self, chat_id: i64, user_id: i64, month: u32, day: u32) {
            self.records.lock().unwrap().push(Birthday {
                chat_id,
                user_id,
                date: NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day).unwrap(),
                username: String::new(),
                first_name: String::new(),
                last_name: String::new(),
            });
        }
    }

    #[async_trait]
    impl Repository for MemoryRepository {
        async fn save(&self, birthday: Birthday) -> Result<(), BotError> {
            let mut records = self.records.lock().unwrap();
            if let Some(existing) = records
                .iter_mut()
                .find(|record| record.chat_id == birthday.chat_id && record.user_id == birthday.user_id)
            {
                *existing = birthday;
            } else {
                records.push(birthday);
            }
            Ok(())
        }

        async fn get_date(
            &self,
            chat_id: i64,
            user_id: i64,
        ) -> Result<Option<NaiveDate>, BotError> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|record| record.chat_id == chat_id && record.user_id == user_id)
                .map(|record| record.date))
        }

        async fn get_upcoming(
            &self,
            chat_id: i64,
            ordinal_floor: u32,
        ) -> Result<Vec<Birthday>, BotError> {
            let records = self.records.lock().unwrap();
            let nearest = records
                .iter()
                .filter(|record| record.chat_id == chat_id)
                .map(|record| adjusted_day_of_year(record.date))
                .filter(|ordinal| *ordinal > ordinal_floor)
                .min();
            let Some(nearest) = nearest else {
                return Ok(Vec::new());
            };
            let mut matches: Vec<Birthday> = records
                .iter()
                .filter(|record| {
                    record.chat_id == chat_id && adjusted_day_of_year(record.date) == nearest
                })
                .cloned()
                .collect();
            matches.sort_by_key(|record| record.user_id);
            Ok(matches)
        }

        async fn get_by_calendar_date(&self, date: NaiveDate) -> Result<Vec<Birthday>, BotError> {
            let ordinal = adjusted_day_of_year(date);
            let mut matches: Vec<Birthday> = self
                .records
                .lock()
                .unwrap()
                .iter()
                .filter(|record| adjusted_day_of_year(record.date) == ordinal)
                .cloned()
                .collect();
            matches.sort_by_key(|record| (record.chat_id, record.user_id));
            Ok(matches)
        }

        async fn delete(&self, _chat_id: i64, _user_id: i64) -> Result<(), BotError> {
            Ok(())
        }

        async fn delete_all_for_chat(&self, _chat_id: i64) -> Result<(), BotError> {
            Ok(())
        }

        async fn delete_all_for_user(&self, _user_id: i64) -> Result<(), BotError> {
            Ok(())
        }
    }

    fn calendar(repository: Arc<MemoryRepository>) -> BirthdayCalendar {
        BirthdayCalendar::new(repository)
    }

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[tokio::test]
    async fn returns_nearest_upcoming_birthday() {
        let repository = Arc::new(MemoryRepository::default());
        repository.seed(1, 10, 3, 15);
        repository.seed(1, 11, 6, 1);

        let upcoming = calendar(repository)
            .upcoming(1, day(2023, 3, 1))
            .await
            .unwrap();

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].user_id, 10);
    }

    #[tokio::test]
    async fn never_returns_past_birthdays_in_cycle() {
        let repository = Arc::new(MemoryRepository::default());
        repository.seed(1, 10, 3, 15);
        repository.seed(1, 11, 6, 1);

        let upcoming = calendar(repository)
            .upcoming(1, day(2023, 3, 20))
            .await
            .unwrap();

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].user_id, 11);
    }

    #[tokio::test]
    async fn wraps_around_at_year_end() {
        let repository = Arc::new(MemoryRepository::default());
        repository.seed(1, 10, 1, 5);
        repository.seed(1, 11, 6, 1);

        let upcoming = calendar(repository)
            .upcoming(1, day(2023, 11, 20))
            .await
            .unwrap();

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].user_id, 10);
    }

    #[tokio::test]
    async fn todays_birthday_wraps_to_next_cycle() {
        let repository = Arc::new(MemoryRepository::default());
        repository.seed(1, 10, 6, 1);

        let upcoming = calendar(repository)
            .upcoming(1, day(2023, 6, 1))
            .await
            .unwrap();

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].user_id, 10);
    }

    #[tokio::test]
    async fn returns_all_tied_birthdays() {
        let repository = Arc::new(MemoryRepository::default());
        repository.seed(1, 12, 3, 15);
        repository.seed(1, 10, 3, 15);
        repository.seed(1, 11, 3, 15);

        let upcoming = calendar(repository)
            .upcoming(1, day(2023, 1, 1))
            .await
            .unwrap();

        let ids: Vec<i64> = upcoming.iter().map(|record| record.user_id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[tokio::test]
    async fn empty_chat_yields_empty_result() {
        let repository = Arc::new(MemoryRepository::default());
        repository.seed(2, 10, 3, 15); // different chat

        let upcoming = calendar(repository)
            .upcoming(1, day(2023, 1, 1))
            .await
            .unwrap();

        assert!(upcoming.is_empty());
    }

    #[tokio::test]
    async fn march_birthdays_do_not_shift_in_non_leap_years() {
        let repository = Arc::new(MemoryRepository::default());
        repository.seed(1, 10, 3, 1);
        repository.seed(1, 11, 3, 2);

        // Without leap adjustment, a non-leap Feb 28th "today" would
        // already skip the March 1st birthday.
        let upcoming = calendar(repository)
            .upcoming(1, day(2023, 2, 28))
            .await
            .unwrap();

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].user_id, 10);
    }

    #[tokio::test]
    async fn matches_calendar_date_across_chats() {
        let repository = Arc::new(MemoryRepository::default());
        repository.seed(1, 10, 3, 1);
        repository.seed(2, 20, 3, 1);
        repository.seed(2, 21, 9, 9);

        let matches = calendar(repository)
            .records_for_date(day(2023, 3, 1))
            .await
            .unwrap();

        let keys: Vec<(i64, i64)> = matches
            .iter()
            .map(|record| (record.chat_id, record.user_id))
            .collect();
        assert_eq!(keys, vec![(1, 10), (2, 20)]);
    }

    #[tokio::test]
    async fn saving_twice_overwrites_instead_of_duplicating() {
        let repository = Arc::new(MemoryRepository::default());
        let record = Birthday {
            chat_id: 1,
            user_id: 10,
            date: day(REFERENCE_YEAR, 2, 20),
            username: String::new(),
            first_name: String::new(),
            last_name: String::new(),
        };
        repository.save(record.clone()).await.unwrap();
        repository
            .save(Birthday {
                date: day(REFERENCE_YEAR, 1, 31),
                ..record
            })
            .await
            .unwrap();
        let calendar = calendar(repository);

        let date = calendar.stored_date(1, 10).await.unwrap();
        assert_eq!(date, Some(day(REFERENCE_YEAR, 1, 31)));

        let old_slot = calendar
            .records_for_date(day(2023, 2, 20))
            .await
            .unwrap();
        assert!(old_slot.is_empty());
    }

    #[tokio::test]
    async fn reads_back_stored_date() {
        let repository = Arc::new(MemoryRepository::default());
        repository.seed(1, 10, 2, 20);
        let calendar = calendar(repository);

        let date = calendar.stored_date(1, 10).await.unwrap();
        assert_eq!(date, Some(day(REFERENCE_YEAR, 2, 20)));

        let missing = calendar.stored_date(1, 99).await.unwrap();
        assert_eq!(missing, None);
    }
}
