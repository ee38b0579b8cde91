//! Dashboard aggregation.
//!
//! [`aggregate`] is a full recomputation over the request collection. It
//! keeps no state between calls, so re-running it with a new ignore list
//! (for example once keyword classification arrives) is always safe.
//!
//! Every ranking is a stable sort over first-encounter order, which makes
//! the output deterministic for a given input order.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use aidconnect_models::{
    AidCategory, AidItem, AidRequest, CategoryNeed, DashboardStats, KeywordFrequency,
    LocationNeed, LocationStat, RequestStatus, SituationEntry, SituationItem,
};

const TOP_CATEGORIES: usize = 5;
const TOP_LOCATION_STATS: usize = 15;
const TOP_URGENT_REGIONS: usize = 3;
const TOP_KEYWORDS: usize = 20;

/// Insertion-ordered accumulator keyed by `K`.
struct Rollup<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K: Hash + Eq + Clone, V: Default> Rollup<K, V> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn entry(&mut self, key: &K) -> &mut V {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                self.entries.push((key.clone(), V::default()));
                self.index.insert(key.clone(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[slot].1
    }

    fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

#[derive(Default, Clone, Copy)]
struct Need {
    needed: u64,
    remaining: u64,
}

impl Need {
    fn add(&mut self, item: &AidItem) {
        self.needed += u64::from(item.quantity_needed);
        self.remaining += u64::from(item.remaining());
    }

    fn percentage(&self) -> u32 {
        unfulfilled_percentage(self.remaining, self.needed)
    }
}

/// `round(remaining / needed * 100)`, halves rounded up, `0` when nothing
/// is needed.
///
/// Computed exactly in integers. A float `round(r / n * 100)` lands just
/// below the half on inputs such as 29/200 or 23/40 and reports 14 and 57;
/// this reports 15 and 58.
pub fn unfulfilled_percentage(remaining: u64, needed: u64) -> u32 {
    if needed == 0 {
        return 0;
    }
    let (remaining, needed) = (u128::from(remaining), u128::from(needed));
    let rounded = (remaining * 200 + needed) / (needed * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

fn normalize_keyword(keyword: &str) -> Option<String> {
    let keyword = keyword.trim();
    (!keyword.is_empty()).then(|| keyword.to_lowercase())
}

/// Items whose keywords count toward the keyword rollup: open items of
/// requests that are not fulfilled. The request-level check comes first.
fn keyword_sources(requests: &[AidRequest]) -> impl Iterator<Item = &AidItem> {
    requests
        .iter()
        .filter(|request| request.status != RequestStatus::Fulfilled)
        .flat_map(|request| request.items.iter())
        .filter(|item| item.remaining() > 0)
}

/// Distinct lower-cased keywords of the contributing items, first-encounter
/// order. This is the vocabulary handed to the generic-keyword classifier.
pub fn keyword_vocabulary(requests: &[AidRequest]) -> Vec<String> {
    let mut seen = HashSet::new();
    keyword_sources(requests)
        .flat_map(|item| item.keywords.iter())
        .filter_map(|keyword| normalize_keyword(keyword))
        .filter(|keyword| seen.insert(keyword.clone()))
        .collect()
}

/// Rolls `requests` up into a dashboard snapshot.
///
/// Category and location totals cover every item regardless of status.
/// Keywords come only from open items of unfulfilled requests and drop
/// anything in `ignored_keywords` (case-insensitive).
#[tracing::instrument(level = "debug", skip_all, fields(requests = requests.len(), ignored = ignored_keywords.len()))]
pub fn aggregate(requests: &[AidRequest], ignored_keywords: &[String]) -> DashboardStats {
    let total_requests = requests.len() as u64;
    let fulfilled_requests = requests
        .iter()
        .filter(|request| request.status == RequestStatus::Fulfilled)
        .count() as u64;

    let mut categories: Rollup<AidCategory, Need> = Rollup::new();
    let mut locations: Rollup<String, Need> = Rollup::new();
    for request in requests {
        let location = locations.entry(&request.location);
        for item in &request.items {
            location.add(item);
        }
        for item in &request.items {
            categories.entry(&item.category).add(item);
        }
    }

    let mut top_needed_items: Vec<CategoryNeed> = categories
        .into_entries()
        .into_iter()
        .map(|(category, need)| CategoryNeed {
            category,
            unfulfilled_percentage: need.percentage(),
        })
        .collect();
    top_needed_items.sort_by(|a, b| b.unfulfilled_percentage.cmp(&a.unfulfilled_percentage));
    top_needed_items.truncate(TOP_CATEGORIES);

    let locations = locations.into_entries();

    let needs_by_location: Vec<LocationNeed> = locations
        .iter()
        .map(|(location, need)| LocationNeed {
            location: location.clone(),
            unfulfilled_count: need.remaining,
        })
        .collect();

    let mut top_urgent_regions = needs_by_location.clone();
    top_urgent_regions.sort_by(|a, b| b.unfulfilled_count.cmp(&a.unfulfilled_count));
    top_urgent_regions.truncate(TOP_URGENT_REGIONS);

    let mut location_stats: Vec<LocationStat> = locations
        .into_iter()
        .map(|(location, need)| LocationStat {
            location,
            unfulfilled_count: need.remaining,
            total_needed: need.needed,
            unfulfilled_percentage: need.percentage(),
        })
        .collect();
    location_stats.sort_by(|a, b| b.unfulfilled_percentage.cmp(&a.unfulfilled_percentage));
    location_stats.truncate(TOP_LOCATION_STATS);

    let ignored: HashSet<String> = ignored_keywords
        .iter()
        .filter_map(|keyword| normalize_keyword(keyword))
        .collect();
    let mut keywords: Rollup<String, u64> = Rollup::new();
    for keyword in keyword_sources(requests)
        .flat_map(|item| item.keywords.iter())
        .filter_map(|keyword| normalize_keyword(keyword))
        .filter(|keyword| !ignored.contains(keyword))
    {
        *keywords.entry(&keyword) += 1;
    }
    let mut keyword_stats: Vec<KeywordFrequency> = keywords
        .into_entries()
        .into_iter()
        .map(|(keyword, frequency)| KeywordFrequency { keyword, frequency })
        .collect();
    keyword_stats.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    keyword_stats.truncate(TOP_KEYWORDS);

    DashboardStats {
        total_requests,
        fulfilled_requests,
        pending_requests: total_requests - fulfilled_requests,
        top_needed_items,
        needs_by_location,
        location_stats,
        top_urgent_regions,
        keyword_stats,
    }
}

/// Outstanding needs of every unfulfilled request, for the situation report.
///
/// Items with nothing left are dropped, and so are requests left with no
/// items after that.
pub fn situation_digest(requests: &[AidRequest]) -> Vec<SituationEntry> {
    requests
        .iter()
        .filter(|request| request.status != RequestStatus::Fulfilled)
        .filter_map(|request| {
            let items: Vec<SituationItem> = request
                .items
                .iter()
                .filter(|item| item.remaining() > 0)
                .map(|item| SituationItem {
                    name: item.name.clone(),
                    remaining: item.remaining(),
                    category: item.category,
                })
                .collect();
            (!items.is_empty()).then(|| SituationEntry {
                location: request.location.clone(),
                items,
            })
        })
        .collect()
}
