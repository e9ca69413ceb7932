use super::factors::RangeOp;

/// Which normalized count a tip looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipSubject {
    Wakeups,
    Alcohol,
}

/// One advisory sentence and the condition that triggers it.
#[derive(Debug, Clone, Copy)]
pub struct Tip {
    pub subject: TipSubject,
    pub when: RangeOp,
    pub sentence: &'static str,
}

impl Tip {
    pub fn applies(&self, wakeup_count: u32, alcohol_count: u32) -> bool {
        match self.subject {
            TipSubject::Wakeups => self.when.matches(wakeup_count),
            TipSubject::Alcohol => self.when.matches(alcohol_count),
        }
    }
}

// Each sentence ends in exactly one of `.?!` and contains no other; split_tips relies on it.
pub const TIPS: [Tip; 8] = [
    Tip {
        subject: TipSubject::Wakeups,
        when: RangeOp::Equal(0),
        sentence: "Amazing, you slept through the whole night without waking up!",
    },
    Tip {
        subject: TipSubject::Wakeups,
        when: RangeOp::Equal(1),
        sentence: "You are doing great with waking up only once!",
    },
    Tip {
        subject: TipSubject::Wakeups,
        when: RangeOp::Equal(2),
        sentence: "Try to reduce the number of times you wake up during the night.",
    },
    Tip {
        subject: TipSubject::Wakeups,
        when: RangeOp::GreaterEqual(3),
        sentence: "You should consider seeing a sleep specialist if you are waking up three or more times during the night.",
    },
    Tip {
        subject: TipSubject::Alcohol,
        when: RangeOp::Equal(0),
        sentence: "Great job not drinking any alcohol before bed!",
    },
    Tip {
        subject: TipSubject::Alcohol,
        when: RangeOp::Equal(1),
        sentence: "Drinking a small amount of alcohol before bed is generally okay, but try not to make it a habit.",
    },
    Tip {
        subject: TipSubject::Alcohol,
        when: RangeOp::Between(2, 5),
        sentence: "Drinking more than 1 oz of alcohol before bed can disrupt your sleep.",
    },
    Tip {
        subject: TipSubject::Alcohol,
        when: RangeOp::GreaterThan(5),
        sentence: "Stop drinking, because more than 5 oz of alcohol before bed can significantly disrupt your sleep!",
    },
];

/// Every tip whose condition holds, in table order. Tips are not exclusive.
pub fn applicable_tips(wakeup_count: u32, alcohol_count: u32) -> Vec<String> {
    TIPS.iter()
        .filter(|tip| tip.applies(wakeup_count, alcohol_count))
        .map(|tip| tip.sentence.to_string())
        .collect()
}

/// Collapse tips into the single string stored with a report.
pub fn join_tips(tips: &[String]) -> String {
    tips.join(" ")
}

/// Split a stored tip string back into sentences, dropping the
/// terminating punctuation and any empty segments.
pub fn split_tips(joined: &str) -> Vec<String> {
    joined
        .split(['.', '?', '!'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
