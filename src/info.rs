use crate::options::DocumentOptions;
use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, Local, NaiveDate, Offset, TimeZone, Timelike};
use pdf_writer::{Date as PDate, Name, Pdf, TextStr};
use std::collections::BTreeMap;

/// The PDF document information dictionary
#[derive(Default, Debug, Clone, PartialEq)]
pub(crate) struct Info {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub author: Option<String>,
    /// Written as the creation date; omitted when absent
    pub created: Option<DateTime<Local>>,
    pub properties: BTreeMap<String, String>,
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn local_midnight(day: NaiveDate) -> Option<DateTime<Local>> {
    day.and_hms_opt(0, 0, 0)
        .and_then(|midnight| Local.from_local_datetime(&midnight).earliest())
}

impl Info {
    /// Collect the metadata for `options`. The creation date is the configured day at
    /// local midnight, falling back to `initialized_at`.
    pub fn from_options(
        options: &DocumentOptions,
        initialized_at: Option<DateTime<Local>>,
    ) -> Info {
        let mut info = Info {
            title: non_empty(&options.title),
            subject: non_empty(&options.subtitle),
            created: initialized_at,
            ..Info::default()
        };
        if let Some(document_info) = &options.info {
            info.author = document_info.author.as_deref().and_then(non_empty);
            info.created = local_midnight(document_info.created).or(initialized_at);
            info.properties = document_info.properties.clone();
        }
        info
    }

    pub fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
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
        for (key, value) in &self.properties {
            info.pair(Name(key.as_bytes()), TextStr(value.as_str()));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        let Some(created) = self.created else {
            return;
        };
        let offset = created.offset().fix();
        let offset_hours = offset.local_minus_utc() / (60 * 60);
        let offset_minutes = ((offset.local_minus_utc() - (offset_hours * (60 * 60))) / 60).abs();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DocumentInfo;

    #[test]
    fn collects_metadata_from_options() {
        let mut document_info = DocumentInfo::new();
        document_info
            .author("Ada Lovelace")
            .created(NaiveDate::from_ymd_opt(2025, 2, 11).unwrap())
            .property("Project", "Analytical Engine");
        let mut options = DocumentOptions::new();
        options.title("Notes").subtitle("  ").info(document_info);

        let info = Info::from_options(&options, Some(Local::now()));
        assert_eq!(info.title.as_deref(), Some("Notes"));
        assert_eq!(info.subject, None);
        assert_eq!(info.author.as_deref(), Some("Ada Lovelace"));
        assert_eq!(info.properties.len(), 1);

        let created = info.created.unwrap();
        assert_eq!((created.year(), created.month(), created.day()), (2025, 2, 11));
        assert_eq!(created.hour(), 0);
    }

    #[test]
    fn falls_back_to_the_initialization_time() {
        let initialized_at = Local.with_ymd_and_hms(2024, 7, 1, 9, 30, 15).unwrap();
        let info = Info::from_options(&DocumentOptions::new(), Some(initialized_at));
        assert_eq!(info.author, None);
        assert_eq!(info.created, Some(initialized_at));
    }

    #[test]
    fn writes_the_same_dictionary_every_time() {
        let initialized_at = Local.with_ymd_and_hms(2024, 7, 1, 9, 30, 15).unwrap();
        let info = Info::from_options(&DocumentOptions::new(), Some(initialized_at));

        let write = || {
            let mut refs = ObjectReferences::new();
            let mut writer = Pdf::new();
            info.write(&mut refs, &mut writer);
            writer.finish()
        };
        let first = write();
        assert_eq!(first, write());
        assert!(String::from_utf8_lossy(&first).contains("/CreationDate (D:20240701093015"));
    }

    #[test]
    fn omits_an_unknown_creation_date() {
        let mut refs = ObjectReferences::new();
        let mut writer = Pdf::new();
        Info::default().write(&mut refs, &mut writer);
        assert!(!String::from_utf8_lossy(&writer.finish()).contains("/CreationDate"));
    }
}
