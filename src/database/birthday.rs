use async_trait::async_trait;
use chrono::NaiveDate;

use super::Database;
use crate::error::BotError;
use crate::models::Birthday;
use crate::ports::Repository;
use crate::utils::dates::adjusted_day_of_year;

type BirthdayRow = (i64, i64, NaiveDate, String, String, String);

fn from_row(row: BirthdayRow) -> Birthday {
    let (chat_id, user_id, date, username, first_name, last_name) = row;
    Birthday {
        chat_id,
        user_id,
        date,
        username,
        first_name,
        last_name,
    }
}

#[async_trait]
impl Repository for Database {
    /// Save or update a birthday, keyed by (chat, user). The adjusted
    /// day-of-year is stored alongside the date so calendar queries
    /// stay index-friendly.
    async fn save(&self, birthday: Birthday) -> Result<(), BotError> {
        sqlx::query(
            r#"
            INSERT INTO birthdays (chat_id, user_id, date, adjusted_day_of_year, username, first_name, last_name)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (chat_id, user_id)
            DO UPDATE SET
                date = $3,
                adjusted_day_of_year = $4,
                username = $5,
                first_name = $6,
                last_name = $7
            "#,
        )
        .bind(birthday.chat_id)
        .bind(birthday.user_id)
        .bind(birthday.date)
        .bind(adjusted_day_of_year(birthday.date) as i32)
        .bind(&birthday.username)
        .bind(&birthday.first_name)
        .bind(&birthday.last_name)
        .execute(self.pool())
        .await
        .map_err(BotError::persistence)?;
        Ok(())
    }

    async fn get_date(&self, chat_id: i64, user_id: i64) -> Result<Option<NaiveDate>, BotError> {
        let result: Option<(NaiveDate,)> =
            sqlx::query_as("SELECT date FROM birthdays WHERE chat_id = $1 AND user_id = $2")
                .bind(chat_id)
                .bind(user_id)
                .fetch_optional(self.pool())
                .await
                .map_err(BotError::persistence)?;

        Ok(result.map(|(date,)| date))
    }

    /// All records in a chat tied for the smallest adjusted day-of-year
    /// strictly greater than the floor
    async fn get_upcoming(
        &self,
        chat_id: i64,
        ordinal_floor: u32,
    ) -> Result<Vec<Birthday>, BotError> {
        let rows: Vec<BirthdayRow> = sqlx::query_as(
            r#"
            WITH closest_birthday AS (
                SELECT adjusted_day_of_year
                FROM birthdays
                WHERE chat_id = $1 AND adjusted_day_of_year > $2
                ORDER BY adjusted_day_of_year
                LIMIT 1
            )
            SELECT chat_id, user_id, date, username, first_name, last_name
            FROM birthdays
            WHERE chat_id = $1
              AND adjusted_day_of_year = (SELECT adjusted_day_of_year FROM closest_birthday)
            ORDER BY user_id
            "#,
        )
        .bind(chat_id)
        .bind(ordinal_floor as i32)
        .fetch_all(self.pool())
        .await
        .map_err(BotError::persistence)?;

        Ok(rows.into_iter().map(from_row).collect())
    }

    async fn get_by_calendar_date(&self, date: NaiveDate) -> Result<Vec<Birthday>, BotError> {
        let rows: Vec<BirthdayRow> = sqlx::query_as(
            "SELECT chat_id, user_id, date, username, first_name, last_name \
             FROM birthdays WHERE adjusted_day_of_year = $1 \
             ORDER BY chat_id, user_id",
        )
        .bind(adjusted_day_of_year(date) as i32)
        .fetch_all(self.pool())
        .await
        .map_err(BotError::persistence)?;

        Ok(rows.into_iter().map(from_row).collect())
    }

    async fn delete(&self, chat_id: i64, user_id: i64) -> Result<(), BotError> {
        sqlx::query("DELETE FROM birthdays WHERE chat_id = $1 AND user_id = $2")
            .bind(chat_id)
            .bind(user_id)
            .execute(self.pool())
            .await
            .map_err(BotError::persistence)?;
        Ok(())
    }

    async fn delete_all_for_chat(&self, chat_id: i64) -> Result<(), BotError> {
        sqlx::query("DELETE FROM birthdays WHERE chat_id = $1")
            .bind(chat_id)
            .execute(self.pool())
            .await
            .map_err(BotError::persistence)?;
        Ok(())
    }

    async fn delete_all_for_user(&self, user_id: i64) -> Result<(), BotError> {
        sqlx::query("DELETE FROM birthdays WHERE user_id = $1")
            .bind(user_id)
            .execute(self.pool())
            .await
            .map_err(BotError::persistence)?;
        Ok(())
    }
}
