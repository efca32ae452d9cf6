//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events and load results

use super::state::DashboardState;

use crate::events::Event;
use crate::network::ErrorHandler;
use crate::router::{Route, ViewId};
use crate::views::loader::{LoadRequest, LoadResult, Payload, Slot};
use crate::views::modals::{MEMBER_ALERT, QUALITY_ALERT};
use crate::views::{
    ContractsView, KpiView, LoadState, MemberDetail, MembersView, Modal, ProvidersView,
    QualityOverview, error_message,
};

impl DashboardState {
    /// Advance the tick and move queued events into the activity log.
    pub fn update(&mut self) {
        self.tick += 1;
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }

    /// Marks the slot a request fills as loading.
    pub fn begin_load(&mut self, request: &LoadRequest) {
        match request.slot() {
            Slot::View(ViewId::Contracts) => self.contracts = LoadState::Loading,
            Slot::View(ViewId::Providers) => self.providers = LoadState::Loading,
            Slot::View(ViewId::Members) => self.members = LoadState::Loading,
            Slot::View(ViewId::KpiSummary) => self.kpi = LoadState::Loading,
            Slot::Modal => self.modal = Some(Modal::Loading(request.thing())),
        }
    }

    /// Applies an accepted load result and returns the activity entry describing it.
    pub fn apply_load(&mut self, result: LoadResult, handler: &ErrorHandler) -> Event {
        let LoadResult {
            request, outcome, ..
        } = result;
        match outcome {
            Ok(payload) => {
                self.apply_payload(payload);
                Event::loaded(format!("Loaded {}", request))
            }
            Err(error) => {
                let message = error_message(request.thing(), &error);
                match request.slot() {
                    Slot::View(ViewId::Contracts) => self.contracts = LoadState::Failed(message.clone()),
                    Slot::View(ViewId::Providers) => self.providers = LoadState::Failed(message.clone()),
                    Slot::View(ViewId::Members) => self.members = LoadState::Failed(message.clone()),
                    Slot::View(ViewId::KpiSummary) => self.kpi = LoadState::Failed(message.clone()),
                    Slot::Modal => {
                        let alert = match request {
                            LoadRequest::QualityGaps => QUALITY_ALERT,
                            _ => MEMBER_ALERT,
                        };
                        self.modal = Some(Modal::Alert(alert));
                    }
                }
                Event::load_failed(message, handler.classify_error(&error))
            }
        }
    }

    fn apply_payload(&mut self, payload: Payload) {
        match payload {
            Payload::Contracts(contracts) => {
                self.contracts = LoadState::Ready(ContractsView::new(contracts));
            }
            Payload::Providers {
                contracts,
                providers,
            } => {
                let contract_id = match self.router.current() {
                    Route::Providers { contract_id, .. } => contract_id.clone(),
                    _ => String::new(),
                };
                self.providers =
                    LoadState::Ready(ProvidersView::new(&contract_id, contracts, providers));
            }
            Payload::Members(members) => {
                let unit_name = match self.router.current() {
                    Route::Members { unit_name, .. } => unit_name.clone(),
                    _ => String::new(),
                };
                self.members = LoadState::Ready(MembersView::new(&unit_name, members));
            }
            Payload::Kpi {
                members,
                quality_gaps,
            } => {
                self.kpi = LoadState::Ready(KpiView::new(members, quality_gaps));
            }
            Payload::MemberDetail {
                member,
                quality_gaps,
            } => {
                self.modal = Some(Modal::MemberDetail(Box::new(MemberDetail::new(
                    *member,
                    quality_gaps,
                ))));
            }
            Payload::QualityGaps(gaps) => {
                self.modal = Some(Modal::Quality(QualityOverview { gaps }));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventType;
    use crate::logging::LogLevel;
    use crate::network::DataError;
    use crate::router::Router;
    use crate::ui::UIConfig;

    fn state() -> DashboardState {
        DashboardState::new("test".to_string(), Router::new(), UIConfig::new(false))
    }

    #[test]
    fn failed_view_load_shows_the_error() {
        let mut state = state();
        let event = state.apply_load(
            LoadResult {
                request: LoadRequest::Contracts,
                generation: 1,
                outcome: Err(DataError::Http { status: 500 }),
            },
            &ErrorHandler::new(),
        );
        assert_eq!(
            state.current_error(),
            Some("Error loading contracts: HTTP error! status: 500")
        );
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.log_level, LogLevel::Warn);
    }

    #[test]
    fn providers_use_the_routed_contract() {
        let mut state = state();
        state.router.view_providers("C2", "Beta");
        let contracts = serde_json::from_str::<crate::model::ContractsEnvelope>(
            r#"{"contracts": [{"id": "C2", "contract_name": "Beta", "contract_type": "Medicaid"}]}"#,
        )
        .unwrap()
        .contracts;
        state.apply_load(
            LoadResult {
                request: LoadRequest::Providers,
                generation: 1,
                outcome: Ok(Payload::Providers {
                    contracts,
                    providers: Vec::new(),
                }),
            },
            &ErrorHandler::new(),
        );
        let view = state.providers.ready().unwrap();
        assert_eq!(view.contract_id(), Some("C2"));
        assert_eq!(view.contract_type(), Some("Medicaid"));
    }

    #[test]
    fn missing_member_raises_the_alert() {
        let mut state = state();
        state.begin_load(&LoadRequest::MemberDetail {
            member_id: "M9".to_string(),
        });
        assert_eq!(state.modal, Some(Modal::Loading("member details")));

        let event = state.apply_load(
            LoadResult {
                request: LoadRequest::MemberDetail {
                    member_id: "M9".to_string(),
                },
                generation: 1,
                outcome: Err(DataError::NotFound {
                    what: "Member",
                    id: "M9".to_string(),
                }),
            },
            &ErrorHandler::new(),
        );
        assert_eq!(state.modal, Some(Modal::Alert(MEMBER_ALERT)));
        assert_eq!(event.log_level, LogLevel::Info);
    }

    #[test]
    fn update_moves_events_into_the_log() {
        let mut state = state();
        state.add_event(Event::navigation("KPI Summary".to_string()));
        state.update();
        assert_eq!(state.activity_logs.len(), 1);
        assert!(state.pending_events.is_empty());
    }
}
