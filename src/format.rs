//! Token patterns for rendering Jalali dates.
//!
//! | Token        | Output                                  |
//! |--------------|-----------------------------------------|
//! | `YYYY`       | four-digit year                         |
//! | `YY`         | last two digits of the year             |
//! | `MM` / `M`   | month, zero-padded / plain              |
//! | `DD` / `D`   | day, zero-padded / plain (see below)    |
//! | `Month`      | Persian month name                      |
//! | `MonthShort` | Latin month abbreviation                |
//! | `Weekday`    | Persian weekday name                    |
//! | `HH`, `mm`, `ss` | zero-padded hour, minute, second    |
//!
//! Tokens are matched longest first; anything else is copied through. In a
//! pattern that spells a name (`Month`, `MonthShort` or `Weekday`), `DD` renders
//! the day without padding, so `DD Month YYYY` reads "1 فروردین 1403".

use std::fmt;

use crate::JalaliDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Year,
    ShortYear,
    PaddedMonth,
    Month,
    PaddedDay,
    Day,
    MonthName,
    MonthShortName,
    WeekdayName,
    Hour,
    Minute,
    Second,
}

impl Token {
    const fn is_name(self) -> bool {
        matches!(self, Self::MonthName | Self::MonthShortName | Self::WeekdayName)
    }
}

/// Keywords in match order. Longer keywords that share a prefix come first.
const KEYWORDS: [(&str, Token); 12] = [
    ("MonthShort", Token::MonthShortName),
    ("Month", Token::MonthName),
    ("Weekday", Token::WeekdayName),
    ("YYYY", Token::Year),
    ("YY", Token::ShortYear),
    ("MM", Token::PaddedMonth),
    ("DD", Token::PaddedDay),
    ("HH", Token::Hour),
    ("mm", Token::Minute),
    ("ss", Token::Second),
    ("M", Token::Month),
    ("D", Token::Day),
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece<'a> {
    Literal(&'a str),
    Token(Token),
}

/// A parsed pattern, reusable across dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern<'a> {
    pieces:  Vec<Piece<'a>>,
    display: bool,
}

impl<'a> Pattern<'a> {
    /// Splits a pattern into tokens and literal runs. Never fails: unknown text is literal.
    pub fn parse(pattern: &'a str) -> Self {
        let mut pieces = Vec::new();
        let mut literal_start = 0;
        let mut pos = 0;

        while pos < pattern.len() {
            let rest = &pattern[pos..];
            if let Some((keyword, token)) = KEYWORDS.iter().find(|(k, _)| rest.starts_with(k)) {
                if literal_start < pos {
                    pieces.push(Piece::Literal(&pattern[literal_start..pos]));
                }
                pieces.push(Piece::Token(*token));
                pos += keyword.len();
                literal_start = pos;
            } else {
                let Some(ch) = rest.chars().next() else {
                    break;
                };
                pos += ch.len_utf8();
            }
        }
        if literal_start < pattern.len() {
            pieces.push(Piece::Literal(&pattern[literal_start..]));
        }

        let display = pieces
            .iter()
            .any(|p| matches!(p, Piece::Token(t) if t.is_name()));
        Self { pieces, display }
    }

    /// Lazily formats `date` with this pattern, for use with `write!` or `to_string`.
    pub const fn with<'p>(&'p self, date: &'p JalaliDate) -> Formatted<'p, 'a> {
        Formatted {
            pattern: self,
            date,
        }
    }

    /// Renders `date` with this pattern.
    pub fn render(&self, date: &JalaliDate) -> String {
        self.with(date).to_string()
    }

    fn write_token(&self, f: &mut fmt::Formatter<'_>, token: Token, date: &JalaliDate) -> fmt::Result {
        let time = date.time();
        match token {
            Token::Year => write!(f, "{:04}", date.year()),
            Token::ShortYear => write!(f, "{:02}", date.year() % 100),
            Token::PaddedMonth => write!(f, "{:02}", date.month()),
            Token::Month => write!(f, "{}", date.month()),
            Token::PaddedDay if !self.display => write!(f, "{:02}", date.day()),
            Token::PaddedDay | Token::Day => write!(f, "{}", date.day()),
            Token::MonthName => f.write_str(date.month_name()),
            Token::MonthShortName => f.write_str(date.month_short_name()),
            Token::WeekdayName => f.write_str(date.weekday_name()),
            Token::Hour => write!(f, "{:02}", time.hour()),
            Token::Minute => write!(f, "{:02}", time.minute()),
            Token::Second => write!(f, "{:02}", time.second()),
        }
    }
}

/// A date paired with a [`Pattern`]; its `Display` output is the rendered pattern.
#[derive(Debug, Clone, Copy)]
pub struct Formatted<'p, 'a> {
    pattern: &'p Pattern<'a>,
    date:    &'p JalaliDate,
}

impl fmt::Display for Formatted<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.pattern.pieces {
            match piece {
                Piece::Literal(text) => f.write_str(text)?,
                Piece::Token(token) => self.pattern.write_token(f, *token, self.date)?,
            }
        }
        Ok(())
    }
}

/// Renders a Jalali date with a token pattern.
pub fn format_jalali(date: &JalaliDate, pattern: &str) -> String {
    Pattern::parse(pattern).render(date)
}
