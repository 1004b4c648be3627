//! Early-recognition statistics for the enrichvs virtual screening toolkit.
//!
//! - **Ranking** — tie-averaged ranks and visiting orders ([`rank`])
//! - **Enrichment metrics** — RIE, BEDROC, enrichment factor, AUC and AUAC
//!   over a ranked hit list ([`enrichment`])
//! - **Tie-batched walk** — cumulative hit/decoy counts at every score change,
//!   shared by the threshold metrics ([`scan`])
//! - **Parameters** — alpha / top / direction settings ([`params`])

pub mod enrichment;
pub mod params;
pub mod rank;
pub mod scan;

pub use enrichment::{Evaluator, MetricSummary};
pub use params::ScreeningParams;
pub use rank::{average_rank, rank_order, Direction};
