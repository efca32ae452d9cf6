//! Background loads for views and modals.
//!
//! Each load runs on its own task with a [`CancellationToken`] and a
//! generation number. Starting a new load for a slot supersedes the previous
//! one; results whose generation no longer matches are dropped.

use crate::events::Event;
use crate::model::{Contract, Member, Provider, QualityGap};
use crate::network::{self, DataError, DataSource};
use crate::router::ViewId;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// What a load fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    View(ViewId),
    Modal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    Contracts,
    Providers,
    Members,
    Kpi,
    MemberDetail { member_id: String },
    QualityGaps,
}

impl LoadRequest {
    pub fn slot(&self) -> Slot {
        match self {
            LoadRequest::Contracts => Slot::View(ViewId::Contracts),
            LoadRequest::Providers => Slot::View(ViewId::Providers),
            LoadRequest::Members => Slot::View(ViewId::Members),
            LoadRequest::Kpi => Slot::View(ViewId::KpiSummary),
            LoadRequest::MemberDetail { .. } | LoadRequest::QualityGaps => Slot::Modal,
        }
    }

    /// Noun used in `Error loading <thing>: ...`.
    pub fn thing(&self) -> &'static str {
        match self {
            LoadRequest::Contracts => "contracts",
            LoadRequest::Providers => "providers",
            LoadRequest::Members => "members",
            LoadRequest::Kpi => "KPI summary",
            LoadRequest::MemberDetail { .. } => "member details",
            LoadRequest::QualityGaps => "quality measures",
        }
    }

    /// Fetches and decodes everything the request needs.
    pub async fn run(&self, source: &dyn DataSource) -> Result<Payload, DataError> {
        match self {
            LoadRequest::Contracts => Ok(Payload::Contracts(network::load_contracts(source).await?)),
            LoadRequest::Providers => {
                let (contracts, providers) = network::load_providers(source).await?;
                Ok(Payload::Providers {
                    contracts,
                    providers,
                })
            }
            LoadRequest::Members => Ok(Payload::Members(network::load_members(source).await?)),
            LoadRequest::Kpi => {
                // The summary renders with whatever loaded.
                let quality_gaps = network::load_quality_gaps(source)
                    .await
                    .unwrap_or_else(|e| {
                        log::warn!("KPI summary without quality gaps: {}", e);
                        Vec::new()
                    });
                let members = network::load_members(source).await.unwrap_or_else(|e| {
                    log::warn!("KPI summary without members: {}", e);
                    Vec::new()
                });
                Ok(Payload::Kpi {
                    members,
                    quality_gaps,
                })
            }
            LoadRequest::MemberDetail { member_id } => {
                let member = network::load_members(source)
                    .await?
                    .into_iter()
                    .find(|member| member.member_id == *member_id)
                    .ok_or_else(|| DataError::NotFound {
                        what: "Member",
                        id: member_id.clone(),
                    })?;
                let quality_gaps = match network::load_quality_gaps(source).await {
                    Ok(gaps) => Some(gaps),
                    Err(e) => {
                        log::warn!("Could not load quality gaps: {}", e);
                        None
                    }
                };
                Ok(Payload::MemberDetail {
                    member: Box::new(member),
                    quality_gaps,
                })
            }
            LoadRequest::QualityGaps => Ok(Payload::QualityGaps(
                network::load_quality_gaps(source).await?,
            )),
        }
    }
}

impl Display for LoadRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadRequest::MemberDetail { member_id } => write!(f, "member {}", member_id),
            other => write!(f, "{}", other.thing()),
        }
    }
}

#[derive(Debug)]
pub enum Payload {
    Contracts(Vec<Contract>),
    Providers {
        contracts: Vec<Contract>,
        providers: Vec<Provider>,
    },
    Members(Vec<Member>),
    Kpi {
        members: Vec<Member>,
        quality_gaps: Vec<QualityGap>,
    },
    MemberDetail {
        member: Box<Member>,
        quality_gaps: Option<Vec<QualityGap>>,
    },
    QualityGaps(Vec<QualityGap>),
}

#[derive(Debug)]
pub struct LoadResult {
    pub request: LoadRequest,
    pub generation: u64,
    pub outcome: Result<Payload, DataError>,
}

pub struct Loader {
    source: Arc<dyn DataSource>,
    results: mpsc::Sender<LoadResult>,
    events: mpsc::Sender<Event>,
    next_generation: u64,
    current: HashMap<Slot, (u64, CancellationToken)>,
}

impl Loader {
    pub fn new(
        source: Arc<dyn DataSource>,
        results: mpsc::Sender<LoadResult>,
        events: mpsc::Sender<Event>,
    ) -> Self {
        Self {
            source,
            results,
            events,
            next_generation: 0,
            current: HashMap::new(),
        }
    }

    /// Spawns the load, cancelling whatever was loading into the same slot.
    pub fn start(&mut self, request: LoadRequest) -> u64 {
        let slot = request.slot();
        self.cancel(slot);

        self.next_generation += 1;
        let generation = self.next_generation;
        let token = CancellationToken::new();
        self.current.insert(slot, (generation, token.clone()));

        let _ = self
            .events
            .try_send(Event::loading(format!("Loading {}", request)));

        let source = Arc::clone(&self.source);
        let results = self.results.clone();
        tokio::spawn(async move {
            let outcome = tokio::select! {
                biased;
                _ = token.cancelled() => None,
                outcome = request.run(source.as_ref()) => Some(outcome),
            };
            match outcome {
                Some(outcome) => {
                    let _ = results
                        .send(LoadResult {
                            request,
                            generation,
                            outcome,
                        })
                        .await;
                }
                None => log::debug!("Cancelled {} load (generation {})", request, generation),
            }
        });
        generation
    }

    /// Cancels the in-flight load of a slot; any result it already sent becomes stale.
    pub fn cancel(&mut self, slot: Slot) {
        if let Some((generation, token)) = self.current.remove(&slot) {
            log::debug!("Cancelling {:?} load (generation {})", slot, generation);
            token.cancel();
        }
    }

    /// Whether a result is still wanted. Stale results are logged and should be dropped.
    pub fn accept(&mut self, result: &LoadResult) -> bool {
        let slot = result.request.slot();
        match self.current.get(&slot) {
            Some((generation, _)) if *generation == result.generation => {
                self.current.remove(&slot);
                true
            }
            current => {
                log::debug!(
                    "Discarding stale {} result (generation {}, current {:?})",
                    result.request,
                    result.generation,
                    current.map(|(generation, _)| *generation)
                );
                false
            }
        }
    }
}
