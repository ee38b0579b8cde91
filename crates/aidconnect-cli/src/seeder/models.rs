//! Configuration for fake request generation.

/// How generated requests are spread across fulfilment states, in percent.
///
/// Whatever is left after `fulfilled` and `partial` stays pending.
#[derive(Debug, Clone, Copy)]
pub struct FulfilmentMix {
    pub fulfilled: u8,
    pub partial: u8,
}

impl Default for FulfilmentMix {
    fn default() -> Self {
        Self {
            fulfilled: 20,
            partial: 35,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub num_requests: usize,
    pub max_items_per_request: usize,
    /// Creation times are spread over this many days before now.
    pub spread_days: u32,
    pub mix: FulfilmentMix,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_requests: 100,
            max_items_per_request: 4,
            spread_days: 14,
            mix: FulfilmentMix::default(),
        }
    }
}

impl SeedConfig {
    pub fn new(num_requests: usize) -> Self {
        Self {
            num_requests,
            ..Default::default()
        }
    }

    pub fn with_max_items(mut self, max_items_per_request: usize) -> Self {
        self.max_items_per_request = max_items_per_request.max(1);
        self
    }

    pub fn with_mix(mut self, mix: FulfilmentMix) -> Self {
        let fulfilled = mix.fulfilled.min(100);
        self.mix = FulfilmentMix {
            fulfilled,
            partial: mix.partial.min(100 - fulfilled),
        };
        self
    }
}

/// Template for a generated item.
pub struct ItemTemplate {
    pub name: &'static str,
    pub category: aidconnect_models::AidCategory,
    pub unit: &'static str,
    pub keywords: &'static [&'static str],
}
