/// Damage dealt by every completed group before combo bonus.
pub const DEFAULT_BASE_DAMAGE: u32 = 10;

/// Upper bound on the combo bonus added to the base damage.
pub const DEFAULT_DAMAGE_CAP: u32 = 10;

/// The standalone moraic nasal.
pub const NASAL_UNIT: &str = "ん";

/// Key that may complete the nasal on its own.
pub const NASAL_TRIGGER: char = 'n';

pub const NASAL_VOWELS: &str = "aiueo";

/// Initials after which a single trigger key stays ambiguous.
pub const NASAL_BLOCKING_CONSONANTS: &str = "ny";
