use urlencoding::encode;

/// Read-only Teams resources relayed to Microsoft Graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TeamsResource {
    JoinedTeams,
    Team { team_id: String },
    Channels { team_id: String },
    Channel { team_id: String, channel_id: String },
    Chats,
    Chat { chat_id: String },
    ChatMessages { chat_id: String },
    ChatMembers { chat_id: String },
    ChannelMessages { team_id: String, channel_id: String },
    TeamMembers { team_id: String },
    User { user_id: String },
    UserPresence { user_id: String },
    Me,
}

impl TeamsResource {
    /// Path below the Graph version root, segments percent-encoded.
    pub fn graph_path(&self) -> String {
        match self {
            TeamsResource::JoinedTeams => "/me/joinedTeams".to_owned(),
            TeamsResource::Team { team_id } => format!("/teams/{}", encode(team_id)),
            TeamsResource::Channels { team_id } => format!("/teams/{}/channels", encode(team_id)),
            TeamsResource::Channel { team_id, channel_id } => {
                format!("/teams/{}/channels/{}", encode(team_id), encode(channel_id))
            }
            TeamsResource::Chats => "/me/chats".to_owned(),
            TeamsResource::Chat { chat_id } => format!("/chats/{}", encode(chat_id)),
            TeamsResource::ChatMessages { chat_id } => format!("/chats/{}/messages", encode(chat_id)),
            TeamsResource::ChatMembers { chat_id } => format!("/chats/{}/members", encode(chat_id)),
            TeamsResource::ChannelMessages { team_id, channel_id } => {
                format!("/teams/{}/channels/{}/messages", encode(team_id), encode(channel_id))
            }
            TeamsResource::TeamMembers { team_id } => format!("/teams/{}/members", encode(team_id)),
            TeamsResource::User { user_id } => format!("/users/{}", encode(user_id)),
            TeamsResource::UserPresence { user_id } => format!("/users/{}/presence", encode(user_id)),
            TeamsResource::Me => "/me".to_owned(),
        }
    }

    /// Whether a missing token is reported as a missing *user* token. Team, channel,
    /// member and user lookups report a plain missing access token.
    pub fn requires_user_token(&self) -> bool {
        !matches!(
            self,
            TeamsResource::Team { .. }
                | TeamsResource::Channels { .. }
                | TeamsResource::Channel { .. }
                | TeamsResource::TeamMembers { .. }
                | TeamsResource::User { .. }
                | TeamsResource::UserPresence { .. }
        )
    }
}

#[cfg(test)]
mod test {
    use super::TeamsResource;

    #[test]
    fn when_resource_is_joined_teams_graph_path_should_be_me_joined_teams() {
        assert_eq!(TeamsResource::JoinedTeams.graph_path(), "/me/joinedTeams");
        assert!(TeamsResource::JoinedTeams.requires_user_token());
    }

    #[test]
    fn when_ids_contain_reserved_characters_they_should_be_percent_encoded() {
        let resource = TeamsResource::ChatMessages { chat_id: "19:abc@thread.v2".to_owned() };

        assert_eq!(resource.graph_path(), "/chats/19%3Aabc%40thread.v2/messages");
    }

    #[test]
    fn when_resource_is_nested_channel_messages_both_ids_should_be_placed() {
        let resource = TeamsResource::ChannelMessages { team_id: "t 1".to_owned(), channel_id: "c/2".to_owned() };

        assert_eq!(resource.graph_path(), "/teams/t%201/channels/c%2F2/messages");
    }

    #[test]
    fn when_resource_is_team_or_user_lookup_user_token_should_not_be_required() {
        assert!(!TeamsResource::Team { team_id: "t".to_owned() }.requires_user_token());
        assert!(!TeamsResource::Channel { team_id: "t".to_owned(), channel_id: "c".to_owned() }.requires_user_token());
        assert!(!TeamsResource::TeamMembers { team_id: "t".to_owned() }.requires_user_token());
        assert!(!TeamsResource::User { user_id: "u".to_owned() }.requires_user_token());
        assert!(!TeamsResource::UserPresence { user_id: "u".to_owned() }.requires_user_token());
    }

    #[test]
    fn when_resource_belongs_to_signed_in_user_user_token_should_be_required() {
        assert!(TeamsResource::Me.requires_user_token());
        assert!(TeamsResource::Chats.requires_user_token());
        assert!(TeamsResource::ChatMembers { chat_id: "c".to_owned() }.requires_user_token());
        assert!(
            TeamsResource::ChannelMessages { team_id: "t".to_owned(), channel_id: "c".to_owned() }.requires_user_token()
        );
    }
}
