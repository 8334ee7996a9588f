use crate::{plate::Plate, plate_count::PlateCount};

/// Most plates a single side of the bar is allowed to carry.
pub const MAX_PLATES_PER_SIDE: u32 = 1_000;

/// Plates on one side of the bar, one counter per denomination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Loadout {
    counts: [u32; Plate::ALL.len()],
}

impl Loadout {
    #[must_use]
    pub fn new() -> Self {
        Loadout::default()
    }

    #[must_use]
    pub fn with(mut self, plate: Plate, count: u32) -> Self {
        self.set(plate, count);
        self
    }

    pub fn set(&mut self, plate: Plate, count: u32) {
        self.counts[plate.index()] = count;
    }

    pub fn add(&mut self, plate: Plate, count: u32) {
        self.counts[plate.index()] = self.counts[plate.index()].saturating_add(count);
    }

    #[must_use]
    pub fn count(&self, plate: Plate) -> u32 {
        self.counts[plate.index()]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|count| *count == 0)
    }

    /// Total number of plates across every denomination.
    #[must_use]
    pub fn plate_count(&self) -> u64 {
        self.counts.iter().map(|count| u64::from(*count)).sum()
    }

    /// Denominations with a non-zero count, heaviest first.
    pub fn iter(&self) -> impl Iterator<Item = (Plate, u32)> + '_ {
        Plate::ALL
            .into_iter()
            .map(move |plate| (plate, self.count(plate)))
            .filter(|(_, count)| *count > 0)
    }

    /// Every plate repeated by its count, heaviest first.
    #[must_use]
    pub fn plates(&self) -> Vec<Plate> {
        self.iter()
            .flat_map(|(plate, count)| std::iter::repeat_n(plate, count as usize))
            .collect()
    }

    #[must_use]
    pub fn from_plates(plates: &[Plate]) -> Self {
        plates.iter().fold(Loadout::new(), |mut acc, plate| {
            acc.add(*plate, 1);
            acc
        })
    }
}

impl FromIterator<PlateCount> for Loadout {
    fn from_iter<I: IntoIterator<Item = PlateCount>>(iter: I) -> Self {
        iter.into_iter().fold(Loadout::new(), |mut acc, entry| {
            acc.add(entry.plate, entry.count);
            acc
        })
    }
}
