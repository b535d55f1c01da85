use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// General document metadata such as title, author, etc
///
/// Nothing time-dependent is written unless a creation date is set, so the same
/// overlay always renders to the same bytes.
#[derive(Default, Debug, Clone)]
pub struct Info {
    /// The title of the document.
    pub title: Option<String>,
    /// The author(s) of the document. No prescribed format.
    pub author: Option<String>,
    /// The subject of the document.
    pub subject: Option<String>,
    /// Keywords for the document, conventionally comma separated
    pub keywords: Option<String>,
    /// When the document was created
    pub creation_date: Option<DateTime<FixedOffset>>,
}

impl Info {
    /// Create a new info block, with all metadata set to [None]
    pub fn new() -> Info {
        Info::default()
    }

    /// Set the title of the info block, modifying `self`
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the author of the info block, modifying `self`
    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    /// Set the subject of the info block, modifying `self`
    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the keywords of the info block, modifying `self`
    pub fn keywords<S: ToString>(&mut self, keywords: S) -> &mut Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    /// Set the creation date of the info block, modifying `self`
    pub fn creation_date(&mut self, date: DateTime<FixedOffset>) -> &mut Self {
        self.creation_date = Some(date);
        self
    }

    /// Stamp the info block with the current local time
    pub fn created_now(&mut self) -> &mut Self {
        self.creation_date(Local::now().fixed_offset())
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.alloc(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author.as_str()));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject.as_str()));
        }
        if let Some(keywords) = &self.keywords {
            info.keywords(TextStr(keywords.as_str()));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        if let Some(created) = &self.creation_date {
            let offset = created.offset().local_minus_utc();
            let offset_hours = offset / (60 * 60);
            let offset_minutes = ((offset - offset_hours * 60 * 60) / 60).abs();
            let date = PDate::new(created.year() as u16)
                .month(created.month() as u8)
                .day(created.day() as u8)
                .hour(created.hour() as u8)
                .minute(created.minute() as u8)
                .second(created.second() as u8)
                .utc_offset_hour(offset_hours as i8)
                .utc_offset_minute(offset_minutes as u8);
            info.creation_date(date);
        }
    }
}
