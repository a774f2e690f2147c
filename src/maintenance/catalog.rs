//! The reference key catalog.
//!
//! Every path a complete locale document is expected to provide. Validation,
//! template generation and the translation report all walk this list in
//! order.

/// Command paths (relative to `commands`) that carry a name and description.
pub const COMMANDS: &[&str] = &[
    "server.status",
    "server.players",
    "admin.ban",
    "admin.unban",
    "admin.kick",
    "admin.teleport",
    "game.shine",
    "game.flip",
    "game.tag",
    "settings.reload",
    "settings.view",
];

/// Full paths of every reference key.
pub const REFERENCE_CATALOG: &[&str] = &[
    // commands
    "commands.server.status.name",
    "commands.server.status.description",
    "commands.server.players.name",
    "commands.server.players.description",
    "commands.admin.ban.name",
    "commands.admin.ban.description",
    "commands.admin.unban.name",
    "commands.admin.unban.description",
    "commands.admin.kick.name",
    "commands.admin.kick.description",
    "commands.admin.teleport.name",
    "commands.admin.teleport.description",
    "commands.game.shine.name",
    "commands.game.shine.description",
    "commands.game.flip.name",
    "commands.game.flip.description",
    "commands.game.tag.name",
    "commands.game.tag.description",
    "commands.settings.reload.name",
    "commands.settings.reload.description",
    "commands.settings.view.name",
    "commands.settings.view.description",
    // responses
    "responses.server.status_title",
    "responses.server.status_info",
    "responses.server.players_title",
    "responses.server.no_players",
    "responses.server.player_info",
    "responses.admin.admin_only",
    "responses.admin.player_banned",
    "responses.admin.player_unbanned",
    "responses.admin.player_kicked",
    "responses.admin.player_not_found",
    "responses.admin.player_teleported",
    "responses.admin.invalid_stage",
    "responses.game.shine_synced",
    "responses.game.shine_cleared",
    "responses.game.flip_applied",
    "responses.game.tag_started",
    "responses.game.tag_stopped",
    "responses.game.tag_seeker_set",
    "responses.game.tag_not_active",
    "responses.settings.reloaded",
    "responses.settings.reload_error",
    "responses.settings.settings_title",
    "responses.settings.settings_info",
    "responses.errors.general",
    "responses.errors.command_failed",
    "responses.errors.internal_error",
    "responses.errors.server_unavailable",
    "responses.language.title",
    "responses.language.current_language",
    "responses.language.current_info",
    "responses.language.user_set",
    "responses.language.auto_detected",
    "responses.language.current",
    "responses.language.available_languages",
    "responses.language.how_to_change",
    "responses.language.change_instructions",
    "responses.language.language_changed",
    "responses.language.language_reset",
    "responses.language.unsupported_language",
    "responses.ban.title",
    "responses.ban.system_status",
    "responses.ban.enabled",
    "responses.ban.disabled",
    "responses.ban.banned_players",
    "responses.ban.banned_ips",
    "responses.ban.banned_stages",
    "responses.ban.banned_gamemodes",
    "responses.ban.no_bans",
    "responses.ban.player_banned",
    "responses.ban.unbanned",
    "responses.ban.nothing_unbanned",
    "responses.ban.multiple_params_error",
    "responses.ban.no_params_error",
    "responses.ban.player_not_in_banlist",
    "responses.ban.playerid_not_in_banlist",
    "responses.ban.ip_not_in_banlist",
    "responses.ban.invalid_playerid_format",
    "responses.ban.invalid_ip_format",
    "responses.ban.player_crashed",
    "responses.ban.player_rejoined",
    "responses.ban.maxplayers_set",
    "responses.ban.invalid_maxplayers",
    "responses.shine.title",
    "responses.shine.collected_moons",
    "responses.shine.excluded_moons",
    "responses.shine.data_unavailable",
    "responses.shine.cleared",
    "responses.shine.synced",
    "responses.shine.sent",
    "responses.shine.sync_enabled",
    "responses.shine.sync_disabled",
    "responses.shine.excluded",
    "responses.shine.included",
    "responses.shine.server_unavailable",
    "responses.teleport.no_players_found",
    "responses.teleport.teleported",
    "responses.teleport.teleported_all",
    "responses.teleport.no_players_connected",
    "responses.teleport.invalid_stage_with_help",
    "responses.tag.time_set",
    "responses.tag.seeking_set",
    "responses.tag.seeking_status",
    "responses.tag.hiding_status",
    "responses.tag.invalid_minutes",
    "responses.tag.invalid_seconds",
    "responses.flip.pov_set",
    "responses.flip.scenario_merge_enabled",
    "responses.flip.scenario_merge_disabled",
    // embeds
    "embeds.colors.success",
    "embeds.colors.error",
    "embeds.colors.info",
    "embeds.colors.warning",
    "embeds.footer",
];

/// The default catalog as owned strings.
#[must_use]
pub fn reference_catalog() -> Vec<String> {
    REFERENCE_CATALOG.iter().map(ToString::to_string).collect()
}

/// Catalog paths inside the `responses` section, without the section prefix.
pub fn response_paths(catalog: &[String]) -> impl Iterator<Item = &str> {
    catalog.iter().filter_map(|key| key.strip_prefix("responses."))
}
