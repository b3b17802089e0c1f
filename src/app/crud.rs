//! The list / edit / save / delete flow shared by all three managers

use super::{NavToken, Outcome, RecordsApp};
use crate::error::{Error, Result};
use crate::interface::{Page, RequestApi};
use crate::model::dtos::RecordKey;
use crate::model::Entity;
use crate::view::cards::ToCard;
use crate::view::{Field, FormKind, ListView, SelectOption};

impl<C: RequestApi, P: Page> RecordsApp<C, P> {
    pub(crate) async fn load_list<E: Entity + ToCard>(&self, token: &NavToken) -> Outcome {
        let section = E::SECTION;
        self.page
            .render_list(section, &ListView::Loading(format!("Loading {}...", E::PLURAL)));

        let result = self.api.list::<E>().await;
        if !token.is_current() {
            log::debug!("dropping stale {} list (generation {})", E::PLURAL, token.generation());
            return Outcome::Discarded;
        }

        match result {
            Ok(records) if records.is_empty() => {
                let message = format!("No {} found. Add one to get started!", E::PLURAL);
                self.page.render_list(section, &ListView::Empty(message));
                Outcome::Applied
            }
            Ok(records) => {
                let cards = records.iter().map(ToCard::to_card).collect();
                self.page.render_list(section, &ListView::Cards(cards));
                Outcome::Applied
            }
            Err(e) => {
                log::error!("Error loading {}: {:?}", E::PLURAL, e);
                let message = format!("Error loading {}: {}", E::PLURAL, e);
                self.page.render_list(section, &ListView::Error(message));
                Outcome::Failed
            }
        }
    }

    /// Fetch one record for its edit form. Failures are alerted here.
    pub(crate) async fn fetch_for_edit<E: Entity>(
        &self,
        id: i64,
        token: &NavToken,
    ) -> core::result::Result<E, Outcome> {
        let result = self.api.get::<E>(id).await;
        if !token.is_current() {
            log::debug!("dropping stale {} {}", E::NOUN, id);
            return Err(Outcome::Discarded);
        }

        result.map_err(|e| {
            self.report_mutation_error("loading", E::NOUN, &e);
            Outcome::Failed
        })
    }

    /// Send a record built from `form`; on success hide the form and reload
    /// the list, on failure leave the form exactly as the user left it.
    pub(crate) async fn submit<E: Entity + ToCard>(
        &self,
        form: FormKind,
        parsed: Result<(RecordKey, E)>,
        token: &NavToken,
    ) -> Outcome {
        let (key, record) = match parsed {
            Ok(parsed) => parsed,
            Err(e) => {
                self.report_mutation_error("saving", E::NOUN, &e);
                return Outcome::Failed;
            }
        };

        match self.api.save(key, &record).await {
            Ok(action) => {
                log::info!("{} {:?}", E::NOUN, action);
                if !token.is_current() {
                    return Outcome::Discarded;
                }
                self.page.set_form_visible(form, false);
                self.load_list::<E>(token).await;
                Outcome::Applied
            }
            Err(e) => {
                self.report_mutation_error("saving", E::NOUN, &e);
                Outcome::Failed
            }
        }
    }

    pub(crate) async fn remove<E: Entity + ToCard>(&self, id: i64, token: &NavToken) -> Outcome {
        let question = format!("Are you sure you want to delete this {}?", E::NOUN);
        if !self.page.confirm(&question) {
            log::debug!("delete of {} {} declined", E::NOUN, id);
            return Outcome::Declined;
        }

        match self.api.delete::<E>(id).await {
            Ok(()) => {
                log::info!("{} {} deleted", E::NOUN, id);
                if !token.is_current() {
                    return Outcome::Discarded;
                }
                self.load_list::<E>(token).await;
                Outcome::Applied
            }
            Err(e) => {
                self.report_mutation_error("deleting", E::NOUN, &e);
                Outcome::Failed
            }
        }
    }

    /// Refill a dependent select from `E`'s list. Failures only reach the
    /// log; the select is left with just its placeholder.
    pub(crate) async fn fill_select<E: Entity>(
        &self,
        field: Field,
        placeholder: &str,
        to_options: fn(&[E]) -> Vec<SelectOption>,
        token: &NavToken,
    ) -> Outcome {
        let result = self.api.list::<E>().await;
        if !token.is_current() {
            return Outcome::Discarded;
        }

        match result {
            Ok(records) => {
                self.page
                    .set_select_options(field, placeholder, &to_options(&records));
                Outcome::Applied
            }
            Err(e) => {
                log::warn!("Error loading {}: {}", E::PLURAL, e);
                self.page.set_select_options(field, placeholder, &[]);
                Outcome::Failed
            }
        }
    }

    /// Reset `form`, clear its hidden id and show it.
    pub(crate) fn present_blank_form(&self, form: FormKind) {
        self.page.reset_form(form);
        self.page.set_field_value(form.id_field(), "");
        self.page.set_form_visible(form, true);
    }

    fn report_mutation_error(&self, verb: &str, noun: &str, e: &Error) {
        let message = format!("Error {verb} {noun}: {e}");
        log::error!("{message}");
        self.page.alert(&message);
    }
}
