use rand::Rng;
use serde::Serialize;

/// Privilege level of a rank. Higher is more senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RankLevel(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rank {
    pub id: &'static str,
    pub level: RankLevel,
    pub name: &'static str,
    #[serde(rename = "minRole")]
    pub min_role: &'static str,
    pub image: &'static str,
}

const DEFAULT_MIN_ROLE: &str = "1026983591978221588";

/// Ranks in ascending order of seniority; `level` equals the index.
static RANKS: [Rank; 7] = [
    Rank { id: "rank1", level: RankLevel(0), name: "Novato", min_role: DEFAULT_MIN_ROLE, image: "/ranks/rank1.png" },
    Rank { id: "rank2", level: RankLevel(1), name: "Aprendiz", min_role: DEFAULT_MIN_ROLE, image: "/ranks/rank2.png" },
    Rank { id: "rank3", level: RankLevel(2), name: "Iniciado", min_role: DEFAULT_MIN_ROLE, image: "/ranks/rank3.png" },
    Rank { id: "rank4", level: RankLevel(3), name: "Experto", min_role: DEFAULT_MIN_ROLE, image: "/ranks/rank4.png" },
    Rank { id: "rank5", level: RankLevel(4), name: "Maestro", min_role: DEFAULT_MIN_ROLE, image: "/ranks/rank5.png" },
    Rank { id: "rank6", level: RankLevel(5), name: "Leyenda", min_role: DEFAULT_MIN_ROLE, image: "/ranks/rank6.png" },
    Rank { id: "rank7", level: RankLevel(6), name: "Divinidad", min_role: DEFAULT_MIN_ROLE, image: "/ranks/rank7.png" },
];

impl Rank {
    pub fn all() -> &'static [Rank] {
        &RANKS
    }

    pub fn lowest() -> &'static Rank {
        &RANKS[0]
    }

    pub fn find(id: &str) -> Option<&'static Rank> {
        RANKS.iter().find(|rank| rank.id == id)
    }

    pub fn level_of(id: &str) -> Option<RankLevel> {
        Self::find(id).map(|rank| rank.level)
    }

    /// Uniform pick over the table
    pub fn random() -> &'static Rank {
        let index = rand::rng().random_range(0..RANKS.len());
        &RANKS[index]
    }

    /// Avatar image for a rank id, the lowest rank's image when unknown or unset
    pub fn image_for(rank_id: Option<&str>) -> &'static str {
        rank_id
            .and_then(Self::find)
            .unwrap_or_else(Self::lowest)
            .image
    }
}

/// True iff both ids are known and `user_rank_id` is at least as senior as `required_rank_id`
pub fn has_minimum_rank(user_rank_id: &str, required_rank_id: &str) -> bool {
    match (Rank::level_of(user_rank_id), Rank::level_of(required_rank_id)) {
        (Some(user), Some(required)) => user >= required,
        _ => false,
    }
}
