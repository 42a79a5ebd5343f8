use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::destination::{Suggestion, CUSTOM_DESTINATION};

/// What the user wants out of the trip. Sent as-is to the candidate places endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TripBrief {
    pub source: String,
    pub destination: String,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub budget: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BriefEdit {
    Source(String),
    Destination(String),
    CustomDestination(String),
    PickSuggestion(Suggestion),
    DepartureDate(Option<NaiveDate>),
    ReturnDate(Option<NaiveDate>),
    Budget(String),
    Description(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BriefError {
    #[error("departure {date} is before today ({today})")]
    DepartureInPast { date: NaiveDate, today: NaiveDate },
    #[error("return date needs a departure date first")]
    ReturnWithoutDeparture,
    #[error("return {date} is before departure {departure}")]
    ReturnBeforeDeparture { date: NaiveDate, departure: NaiveDate },
}

/// Form state behind the brief. Differs from [`TripBrief`] while a custom
/// destination is being typed: the destination field then holds the custom
/// entry label and the reported destination comes from the free-text field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BriefDraft {
    pub source: String,
    pub destination: String,
    pub custom_destination: String,
    pub custom_mode: bool,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub budget: String,
    pub description: String,
}

impl BriefDraft {
    /// Applies one field edit. A rejected edit leaves the draft untouched.
    pub fn apply(&mut self, edit: BriefEdit, today: NaiveDate) -> Result<(), BriefError> {
        match edit {
            BriefEdit::Source(source) => self.source = source,
            BriefEdit::Destination(destination) => {
                if self.custom_mode && destination != CUSTOM_DESTINATION {
                    self.custom_mode = false;
                    self.custom_destination.clear();
                }
                self.destination = destination;
            }
            BriefEdit::CustomDestination(custom) => self.custom_destination = custom,
            BriefEdit::PickSuggestion(Suggestion::Custom) => {
                self.custom_mode = true;
                self.destination = CUSTOM_DESTINATION.to_owned();
            }
            BriefEdit::PickSuggestion(Suggestion::Known(name)) => {
                self.custom_mode = false;
                self.custom_destination.clear();
                self.destination = name;
            }
            BriefEdit::DepartureDate(date) => self.set_departure(date, today)?,
            BriefEdit::ReturnDate(date) => self.set_return(date)?,
            BriefEdit::Budget(budget) => self.budget = budget,
            BriefEdit::Description(description) => self.description = description,
        }
        Ok(())
    }

    fn set_departure(&mut self, date: Option<NaiveDate>, today: NaiveDate) -> Result<(), BriefError> {
        match date {
            Some(date) if date < today => return Err(BriefError::DepartureInPast { date, today }),
            Some(date) => {
                if self.return_date.is_some_and(|ret| ret < date) {
                    self.return_date = None;
                }
            }
            // Return picker is disabled without a departure
            None => self.return_date = None,
        }
        self.departure_date = date;
        Ok(())
    }

    fn set_return(&mut self, date: Option<NaiveDate>) -> Result<(), BriefError> {
        if let Some(date) = date {
            let Some(departure) = self.departure_date else {
                return Err(BriefError::ReturnWithoutDeparture);
            };
            if date < departure {
                return Err(BriefError::ReturnBeforeDeparture { date, departure });
            }
        }
        self.return_date = date;
        Ok(())
    }

    /// Earliest selectable return date.
    pub fn min_return_date(&self, today: NaiveDate) -> NaiveDate {
        self.departure_date.unwrap_or(today)
    }

    /// The brief as reported to the rest of the app.
    pub fn brief(&self) -> TripBrief {
        let destination = if self.custom_mode {
            self.custom_destination.clone()
        } else {
            self.destination.clone()
        };

        TripBrief {
            source: self.source.clone(),
            destination,
            departure_date: self.departure_date,
            return_date: self.return_date,
            budget: self.budget.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 5, 1)
    }

    fn draft_with_dates(departure: NaiveDate, ret: NaiveDate) -> BriefDraft {
        let mut draft = BriefDraft::default();
        draft.apply(BriefEdit::DepartureDate(Some(departure)), today()).unwrap();
        draft.apply(BriefEdit::ReturnDate(Some(ret)), today()).unwrap();
        draft
    }

    #[test]
    fn later_departure_clears_earlier_return() {
        let mut draft = draft_with_dates(date(2025, 6, 1), date(2025, 6, 5));
        draft.apply(BriefEdit::DepartureDate(Some(date(2025, 6, 10))), today()).unwrap();

        assert_eq!(draft.departure_date, Some(date(2025, 6, 10)));
        assert_eq!(draft.return_date, None);
    }

    #[test]
    fn departure_before_return_keeps_return() {
        let mut draft = draft_with_dates(date(2025, 6, 1), date(2025, 6, 5));
        draft.apply(BriefEdit::DepartureDate(Some(date(2025, 6, 3))), today()).unwrap();
        assert_eq!(draft.return_date, Some(date(2025, 6, 5)));

        draft.apply(BriefEdit::DepartureDate(Some(date(2025, 6, 5))), today()).unwrap();
        assert_eq!(draft.return_date, Some(date(2025, 6, 5)));
    }

    #[test]
    fn return_never_precedes_departure_after_any_edit() {
        let edits = [
            BriefEdit::DepartureDate(Some(date(2025, 7, 1))),
            BriefEdit::ReturnDate(Some(date(2025, 7, 3))),
            BriefEdit::DepartureDate(Some(date(2025, 7, 2))),
            BriefEdit::ReturnDate(Some(date(2025, 6, 30))),
            BriefEdit::DepartureDate(Some(date(2025, 8, 1))),
            BriefEdit::Budget("500".into()),
            BriefEdit::DepartureDate(None),
        ];

        let mut draft = BriefDraft::default();
        for edit in edits {
            let _ = draft.apply(edit, today());
            if let (Some(dep), Some(ret)) = (draft.departure_date, draft.return_date) {
                assert!(ret >= dep, "{ret} before {dep}");
            }
        }
    }

    #[test]
    fn rejects_departure_in_the_past() {
        let mut draft = BriefDraft::default();
        let err = draft.apply(BriefEdit::DepartureDate(Some(date(2025, 4, 30))), today());

        assert_eq!(err, Err(BriefError::DepartureInPast { date: date(2025, 4, 30), today: today() }));
        assert_eq!(draft, BriefDraft::default());
    }

    #[test]
    fn rejects_return_without_departure_or_before_it() {
        let mut draft = BriefDraft::default();
        assert_eq!(
            draft.apply(BriefEdit::ReturnDate(Some(date(2025, 6, 1))), today()),
            Err(BriefError::ReturnWithoutDeparture)
        );

        let mut draft = draft_with_dates(date(2025, 6, 1), date(2025, 6, 5));
        assert_eq!(
            draft.apply(BriefEdit::ReturnDate(Some(date(2025, 5, 20))), today()),
            Err(BriefError::ReturnBeforeDeparture { date: date(2025, 5, 20), departure: date(2025, 6, 1) })
        );
        assert_eq!(draft.return_date, Some(date(2025, 6, 5)));
    }

    #[test]
    fn clearing_departure_clears_return() {
        let mut draft = draft_with_dates(date(2025, 6, 1), date(2025, 6, 5));
        draft.apply(BriefEdit::DepartureDate(None), today()).unwrap();
        assert_eq!((draft.departure_date, draft.return_date), (None, None));
    }

    #[test]
    fn min_return_date_follows_departure() {
        let mut draft = BriefDraft::default();
        assert_eq!(draft.min_return_date(today()), today());
        draft.apply(BriefEdit::DepartureDate(Some(date(2025, 6, 1))), today()).unwrap();
        assert_eq!(draft.min_return_date(today()), date(2025, 6, 1));
    }

    #[test]
    fn custom_destination_replaces_reported_destination() {
        let mut draft = BriefDraft::default();
        draft.apply(BriefEdit::Destination("Reyk".into()), today()).unwrap();
        draft.apply(BriefEdit::PickSuggestion(Suggestion::Custom), today()).unwrap();
        draft.apply(BriefEdit::CustomDestination("Reykjavik".into()), today()).unwrap();

        assert!(draft.custom_mode);
        assert_eq!(draft.destination, CUSTOM_DESTINATION);
        assert_eq!(draft.brief().destination, "Reykjavik");
    }

    #[test]
    fn typing_destination_leaves_custom_mode() {
        let mut draft = BriefDraft::default();
        draft.apply(BriefEdit::PickSuggestion(Suggestion::Custom), today()).unwrap();
        draft.apply(BriefEdit::CustomDestination("Reykjavik".into()), today()).unwrap();
        draft.apply(BriefEdit::Destination("Pa".into()), today()).unwrap();

        assert!(!draft.custom_mode);
        assert_eq!(draft.custom_destination, "");
        assert_eq!(draft.brief().destination, "Pa");
    }

    #[test]
    fn picking_known_destination_commits_it() {
        let mut draft = BriefDraft::default();
        draft.apply(BriefEdit::Destination("par".into()), today()).unwrap();
        draft.apply(BriefEdit::PickSuggestion(Suggestion::Known("Paris".into())), today()).unwrap();
        assert_eq!(draft.brief().destination, "Paris");
    }

    #[test]
    fn brief_payload_is_camel_case_with_iso_dates() {
        let mut draft = BriefDraft::default();
        for edit in [
            BriefEdit::Destination("Paris".into()),
            BriefEdit::DepartureDate(Some(date(2025, 6, 1))),
            BriefEdit::ReturnDate(Some(date(2025, 6, 5))),
            BriefEdit::Budget("1000".into()),
            BriefEdit::Description("art".into()),
        ] {
            draft.apply(edit, today()).unwrap();
        }

        assert_eq!(
            serde_json::to_value(draft.brief()).unwrap(),
            json!({
                "source": "",
                "destination": "Paris",
                "departureDate": "2025-06-01",
                "returnDate": "2025-06-05",
                "budget": "1000",
                "description": "art",
            })
        );
    }

    #[test]
    fn unset_dates_serialize_as_null() {
        let value = serde_json::to_value(TripBrief::default()).unwrap();
        assert_eq!(value["departureDate"], json!(null));
        assert_eq!(value["returnDate"], json!(null));
    }
}
