use crate::record::{IpoRecord, NOT_AVAILABLE};

/// A named display slot of the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    IpoName,
    Status,
    Gmp,
    PriceHigh,
    IssueSize,
    RetailSubscription,
    HniSubscription,
    QibSubscription,
    ListingGain,
    BestCategory,
}

impl Slot {
    /// Slots in panel order.
    pub const ALL: [Slot; 10] = [
        Slot::IpoName,
        Slot::Status,
        Slot::Gmp,
        Slot::PriceHigh,
        Slot::IssueSize,
        Slot::RetailSubscription,
        Slot::HniSubscription,
        Slot::QibSubscription,
        Slot::ListingGain,
        Slot::BestCategory,
    ];

    /// Stable key of the slot on the presentation surface.
    pub fn id(self) -> &'static str {
        match self {
            Slot::IpoName => "ipo-name",
            Slot::Status => "status",
            Slot::Gmp => "gmp",
            Slot::PriceHigh => "price-high",
            Slot::IssueSize => "issue-size",
            Slot::RetailSubscription => "retail-sub",
            Slot::HniSubscription => "hni-sub",
            Slot::QibSubscription => "qib-sub",
            Slot::ListingGain => "listing-gain",
            Slot::BestCategory => "best-category",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::IpoName => "IPO",
            Slot::Status => "Status",
            Slot::Gmp => "GMP",
            Slot::PriceHigh => "Price (high)",
            Slot::IssueSize => "Issue size",
            Slot::RetailSubscription => "Retail subscription",
            Slot::HniSubscription => "HNI subscription",
            Slot::QibSubscription => "QIB subscription",
            Slot::ListingGain => "Listing gain",
            Slot::BestCategory => "Best category",
        }
    }

    /// Whether the row is hidden when it shows the "N/A" marker.
    /// Name and status are always shown.
    pub fn suppressible(self) -> bool {
        !matches!(self, Slot::IpoName | Slot::Status)
    }

    fn text(self, record: &IpoRecord) -> &str {
        let value = match self {
            Slot::IpoName => return &record.ipo_name,
            Slot::Status => &record.status,
            Slot::Gmp => &record.gmp,
            Slot::PriceHigh => &record.price_high,
            Slot::IssueSize => &record.issue_size,
            Slot::RetailSubscription => &record.retail_subscription,
            Slot::HniSubscription => &record.hni_subscription,
            Slot::QibSubscription => &record.qib_subscription,
            Slot::ListingGain => &record.listing_gain,
            Slot::BestCategory => &record.best_category,
        };
        value.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub slot: Slot,
    pub text: String,
    pub visible: bool,
}

/// Everything the results panel shows for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub slots: Vec<SlotView>,
}

impl ViewModel {
    pub fn get(&self, slot: Slot) -> Option<&SlotView> {
        self.slots.iter().find(|view| view.slot == slot)
    }

    pub fn visible(&self) -> impl Iterator<Item = &SlotView> {
        self.slots.iter().filter(|view| view.visible)
    }
}

pub fn render(record: &IpoRecord) -> ViewModel {
    let slots = Slot::ALL
        .iter()
        .map(|&slot| {
            let text = slot.text(record).to_string();
            let visible = !(slot.suppressible() && text == NOT_AVAILABLE);
            SlotView {
                slot,
                text,
                visible,
            }
        })
        .collect();

    ViewModel { slots }
}
