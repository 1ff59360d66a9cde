#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BaseCounters {
    pub total: u64,
    pub g: u64,
    pub c: u64,
    /// Every byte that is neither G nor C
    pub neutral: u64,
}

impl BaseCounters {
    /// Tally a sequence in one pass (case-insensitive)
    pub fn tally(seq: &[u8]) -> Self {
        let mut counters = BaseCounters::default();
        for &b in seq {
            counters.total += 1;
            match b.to_ascii_uppercase() {
                b'G' => counters.g += 1,
                b'C' => counters.c += 1,
                _ => counters.neutral += 1,
            }
        }
        counters
    }

    /// GC content in percent of all symbols
    pub fn gc_pct(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.g + self.c) as f64 / self.total as f64 * 100.0
    }
}

impl std::ops::AddAssign for BaseCounters {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.g += other.g;
        self.c += other.c;
        self.neutral += other.neutral;
    }
}
