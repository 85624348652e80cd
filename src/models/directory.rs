use crate::utils::search::matches_any;
use serde::{Deserialize, Serialize};

/// A server member as listed on the users page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: &'static str,
    pub username: &'static str,
    pub online: bool,
    pub rank_id: &'static str,
}

static MEMBERS: [Member; 10] = [
    Member { id: "1", username: "usuario1", online: true, rank_id: "rank1" },
    Member { id: "2", username: "usuario2", online: false, rank_id: "rank2" },
    Member { id: "3", username: "usuario3", online: true, rank_id: "rank3" },
    Member { id: "4", username: "usuario4", online: true, rank_id: "rank4" },
    Member { id: "5", username: "usuario5", online: false, rank_id: "rank5" },
    Member { id: "6", username: "usuario6", online: true, rank_id: "rank6" },
    Member { id: "7", username: "usuario7", online: true, rank_id: "rank7" },
    Member { id: "8", username: "usuario8", online: false, rank_id: "rank2" },
    Member { id: "9", username: "usuario9", online: true, rank_id: "rank3" },
    Member { id: "10", username: "usuario10", online: true, rank_id: "rank1" },
];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberFilter {
    #[serde(default)]
    pub q: String,
    /// Rank id, or `all`/absent for any rank
    pub rank: Option<String>,
    #[serde(default)]
    pub online: bool,
}

impl MemberFilter {
    pub fn matches(&self, member: &Member) -> bool {
        let matches_search = matches_any(&self.q, &[member.username]);
        let matches_rank = match self.rank.as_deref() {
            None | Some("all") | Some("") => true,
            Some(rank) => member.rank_id == rank,
        };
        let matches_online = !self.online || member.online;

        matches_search && matches_rank && matches_online
    }
}

pub fn members(filter: &MemberFilter) -> Vec<&'static Member> {
    MEMBERS.iter().filter(|m| filter.matches(m)).collect()
}

/// A chat command the bot understands
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotCommand {
    pub name: &'static str,
    pub description: &'static str,
    pub syntax: &'static str,
}

static COMMANDS: [BotCommand; 4] = [
    BotCommand { name: "Ver placas", description: "Muestra todas tus placas disponibles", syntax: "!placas" },
    BotCommand { name: "Ver inventario", description: "Muestra todos los items en tu inventario", syntax: "!inventario" },
    BotCommand { name: "Equipar placa", description: "Equipa una placa específica por su ID", syntax: "!equipar-placa <id>" },
    BotCommand { name: "Dar placa", description: "Da una placa a otro usuario (solo admins)", syntax: "!dar-placa <@usuario> <id>" },
];

pub fn commands(term: &str) -> Vec<&'static BotCommand> {
    COMMANDS
        .iter()
        .filter(|c| matches_any(term, &[c.name, c.description, c.syntax]))
        .collect()
}
