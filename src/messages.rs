//! User-facing reply texts. All strings are Telegram HTML.

pub const WRONG_FORMAT: &str = "Hmm, I couldn't read that date 🤔\n\
    Could you try again in the <code>31.01</code> (day.month) format?";

pub const SAVE_FAILURE: &str = "Something went wrong on my side and I couldn't \
    save your birthday 😔 Please try again in a little while.";

pub const GET_FAILURE: &str = "Something went wrong on my side and I couldn't \
    look that up 😔 Please try again in a little while.";

pub const UNSET_FAILURE: &str = "Something went wrong on my side and I couldn't \
    remove that 😔 Please try again in a little while.";

pub const NO_OWN_BIRTHDAY_SET: &str = "I don't know your birthday yet!\n\
    Tell me with <code>/setbirthday 31.01</code> and I'll remember it 🎂";

pub const NO_BIRTHDAY_SET: &str = "They haven't told me their birthday yet 🤐";

pub const NO_BIRTHDAYS: &str = "Nobody in this chat has shared a birthday \
    with me yet. Be the first with <code>/setbirthday 31.01</code>! 🎈";

pub const BOT_BIRTHDAY: &str = "Mine? I was born on <b>February 29th</b>, so I \
    only get a real party every four years 🥳";

pub const SHORT_HELP: &str = "Hi! Type /help to see what I can do 🎂";

pub const GROUP_COMMAND_ONLY: &str =
    "That one only works in group chats — add me to a group and try it there!";

pub const FULL_HELP: &str = "Hi! I'm a birthday bot: add me to a group and \
    I'll keep track of everyone's special day 🎂\n\
    Birthday announcements go out at 7 AM UTC.\n\n\
    Group commands:\n\
    \t/setbirthday 31.01 - sets your birthday\n\
    \t/mybirthday - shows your birthday\n\
    \t/getbirthday - shows your birthday, or that of the person you're replying to\n\
    \t/nextbirthday - shows the next birthday in the chat\n\
    \t/unsetbirthday - forgets your birthday\n\n\
    Commands that work here in a private chat:\n\
    \t/help - shows this message\n\
    \t/privacy - explains what data I keep\n\
    \t/source - links to my source code\n\
    \t/clear all data - removes everything you've ever told me, in every group\n";

pub const PRIVACY: &str = "I store your user id, username, first name, last \
    name and a birthday date for every chat where you have set one. \
    Use /unsetbirthday in a chat to delete that chat's entry; leaving a chat \
    deletes it too, and removing me from a group deletes everything for that \
    group. To erase your data everywhere, send <code>/clear all data</code>.";

pub const SOURCE: &str =
    "My source code lives on <a href=\"https://github.com/4Kaze/birthdaybot\">GitHub</a> 🛠️";

pub const DATA_CLEARED: &str =
    "Done — I've forgotten everything you ever told me 🗑️";

pub const CLEAR_INSTRUCTIONS: &str = "To delete all your data stored by this \
    bot, type exactly <code>/clear all data</code>.";

pub fn own_birthday(date: &str) -> String {
    format!("Of course I remember! You were born on <b>{date}</b>, right? 🎂")
}

pub fn someones_birthday(date: &str) -> String {
    format!("Their birthday? It's on <b>{date}</b> 🎂")
}

pub fn next_birthday(name: &str, date: &str) -> String {
    format!("The next one is {name}'s birthday on <b>{date}</b>! 🎉")
}

pub fn next_birthdays(count: usize, date: &str, names: &str) -> String {
    format!(
        "What a coincidence — <b>{count}</b> people have their birthday on \
        <b>{date}</b>! It's {names}! 🎉"
    )
}
