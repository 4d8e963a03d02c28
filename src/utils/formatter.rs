/// Pure functions for rendering people and birthday announcements
use crate::messages;
use crate::models::Birthday;
use crate::utils::dates::format_date_for_display;

/// Render a person for output: "first [last]" as a clickable mention,
/// falling back to "@username" when both names are empty.
pub fn person_name(birthday: &Birthday) -> String {
    if birthday.first_name.is_empty() && birthday.last_name.is_empty() {
        return format!("@{}", birthday.username);
    }
    let name = if birthday.last_name.is_empty() {
        birthday.first_name.clone()
    } else {
        format!("{} {}", birthday.first_name, birthday.last_name)
    };
    format!("<a href=\"tg://user?id={}\">{}</a>", birthday.user_id, name)
}

/// Compose the next-birthday announcement for one or more people
/// sharing the same date. Callers guarantee a non-empty slice.
pub fn next_birthday_message(birthdays: &[Birthday]) -> String {
    let date = format_date_for_display(birthdays[0].date);
    if let [only] = birthdays {
        return messages::next_birthday(&person_name(only), &date);
    }
    let names: Vec<String> = birthdays.iter().map(person_name).collect();
    messages::next_birthdays(birthdays.len(), &date, &join_names(&names))
}

/// Join names as "X", "X and Y" or "X, Y and Z"
fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}
