use {
    crate::{domain::{Location, Prayer, TimeOfDay}, models::TimeRemaining, utils::bengali_digits},
    chrono::{Datelike, NaiveDate},
    std::sync::LazyLock,
    strum_macros::EnumIter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum Language {
    #[default]
    English,
    Bengali,
}

const WEEKDAYS_BN: [&str; 7] = ["সোম", "মঙ্গল", "বুধ", "বৃহঃ", "শুক্র", "শনি", "রবি"];
const MONTHS_BN: [&str; 12] = [
    "জানু", "ফেব", "মার্চ", "এপ্রি", "মে", "জুন", "জুলা", "আগ", "সেপ", "অক্টো", "নভে", "ডিসে",
];

pub struct UiText {
    pub language: Language,

    // --- Headings ---
    pub title_today: String,
    pub title_calendar: String,
    pub title_cities: String,

    // --- Labels ---
    pub label_ramadan_day: String,
    pub label_sehri_end: String,
    pub label_iftar: String,
    pub label_remaining: String,
    pub label_next: String,
    pub label_tomorrow: String,
    pub label_selected: String,
    pub label_hms: (String, String, String),

    // --- Calendar columns ---
    pub col_today: String,
    pub col_day: String,
    pub col_date: String,

    // --- Fallback notes ---
    pub note_before_ramadan: String,
    pub note_after_ramadan: String,
    pub note_missing_entry: String,
    pub note_accuracy: String,
    pub note_city_saved: String,
}

impl UiText {
    pub fn for_language(language: Language) -> &'static UiText {
        match language {
            Language::English => &UI_TEXT_EN,
            Language::Bengali => &UI_TEXT_BN,
        }
    }

    pub fn time(&self, time: TimeOfDay) -> String {
        match self.language {
            Language::English => time.to_string(),
            Language::Bengali => time.to_bengali_12h(),
        }
    }

    pub fn remaining(&self, remaining: TimeRemaining) -> String {
        match self.language {
            Language::English => remaining.to_string(),
            Language::Bengali => remaining.to_bengali(),
        }
    }

    /// Two-digit day number, e.g. "07".
    pub fn day_number(&self, day: u32) -> String {
        let text = format!("{:02}", day);
        match self.language {
            Language::English => text,
            Language::Bengali => bengali_digits(&text),
        }
    }

    /// Short weekday and date, e.g. "Thu 19 Feb".
    pub fn date(&self, date: NaiveDate) -> String {
        match self.language {
            Language::English => date.format("%a %d %b").to_string(),
            Language::Bengali => format!(
                "{} {} {}",
                WEEKDAYS_BN[date.weekday().num_days_from_monday() as usize],
                bengali_digits(&date.day().to_string()),
                MONTHS_BN[date.month0() as usize]
            ),
        }
    }

    pub fn prayer(&self, prayer: Prayer) -> String {
        match self.language {
            Language::English => prayer.to_string(),
            Language::Bengali => prayer.name_bn().to_string(),
        }
    }

    pub fn location(&self, location: &Location) -> String {
        match self.language {
            Language::English => location.name.to_string(),
            Language::Bengali => location.name_bn.to_string(),
        }
    }
}

pub static UI_TEXT_EN: LazyLock<UiText> = LazyLock::new(|| UiText {
    language: Language::English,

    title_today: "Today's prayer times".to_string(),
    title_calendar: "Ramadan calendar".to_string(),
    title_cities: "Cities".to_string(),

    label_ramadan_day: "Ramadan".to_string(),
    label_sehri_end: "Sehri ends".to_string(),
    label_iftar: "Iftar".to_string(),
    label_remaining: "Time left".to_string(),
    label_next: "next".to_string(),
    label_tomorrow: "tomorrow".to_string(),
    label_selected: "selected".to_string(),
    label_hms: ("h".to_string(), "m".to_string(), "s".to_string()),

    col_today: "".to_string(),
    col_day: "Day".to_string(),
    col_date: "Date".to_string(),

    note_before_ramadan: "Ramadan has not started yet. Showing day 1.".to_string(),
    note_after_ramadan: "Ramadan is over. Showing day 1.".to_string(),
    note_missing_entry: "No timings for today in the table. Showing day 1.".to_string(),
    note_accuracy: "Times may differ by 1-2 minutes depending on your exact location.".to_string(),
    note_city_saved: "City saved:".to_string(),
});

pub static UI_TEXT_BN: LazyLock<UiText> = LazyLock::new(|| UiText {
    language: Language::Bengali,

    title_today: "আজকের নামাজের সময়".to_string(),
    title_calendar: "রমজান ক্যালেন্ডার".to_string(),
    title_cities: "শহর".to_string(),

    label_ramadan_day: "রমজান".to_string(),
    label_sehri_end: "সেহরি শেষ".to_string(),
    label_iftar: "ইফতার".to_string(),
    label_remaining: "বাকি সময়".to_string(),
    label_next: "পরবর্তী".to_string(),
    label_tomorrow: "আগামীকাল".to_string(),
    label_selected: "নির্বাচিত".to_string(),
    label_hms: ("ঘণ্টা".to_string(), "মিনিট".to_string(), "সেকেন্ড".to_string()),

    col_today: "".to_string(),
    col_day: "দিন".to_string(),
    col_date: "তারিখ".to_string(),

    note_before_ramadan: "রমজান এখনও শুরু হয়নি। প্রথম দিনের সময় দেখানো হচ্ছে।".to_string(),
    note_after_ramadan: "রমজান শেষ হয়েছে। প্রথম দিনের সময় দেখানো হচ্ছে।".to_string(),
    note_missing_entry: "আজকের সময় পাওয়া যায়নি। প্রথম দিনের সময় দেখানো হচ্ছে।".to_string(),
    note_accuracy: "* আপনার লোকেশনের ওপর ভিত্তি করে সময় ১-২ মিনিট কম-বেশি হতে পারে".to_string(),
    note_city_saved: "শহর সংরক্ষিত:".to_string(),
});

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_language_has_text() {
        for language in Language::iter() {
            let text = UiText::for_language(language);
            assert_eq!(text.language, language);
            assert!(!text.title_today.is_empty());
            assert!(!text.label_iftar.is_empty());
        }
    }

    #[test]
    fn bengali_formatting() {
        let text = UiText::for_language(Language::Bengali);
        let date = NaiveDate::from_ymd_opt(2026, 2, 19).unwrap();
        assert_eq!(text.date(date), "বৃহঃ ১৯ ফেব");
        assert_eq!(text.day_number(7), "০৭");
        assert_eq!(text.time(TimeOfDay::new(17, 57).unwrap()), "৫:৫৭");
        assert_eq!(text.prayer(Prayer::Maghrib), "মাগরিব");
    }

    #[test]
    fn english_formatting() {
        let text = UiText::for_language(Language::English);
        let date = NaiveDate::from_ymd_opt(2026, 2, 19).unwrap();
        assert_eq!(text.date(date), "Thu 19 Feb");
        assert_eq!(text.time(TimeOfDay::new(17, 57).unwrap()), "17:57");
        assert_eq!(text.remaining(TimeRemaining::from_seconds(61)), "00:01:01");
    }
}
