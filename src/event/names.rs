//! Post types and canonical event names.

pub const POST_TYPE_MESSAGE: &str = "message";
pub const POST_TYPE_NOTICE: &str = "notice";
pub const POST_TYPE_REQUEST: &str = "request";
pub const POST_TYPE_META: &str = "meta_event";

pub const MESSAGE: &str = "message";
pub const PRIVATE_MESSAGE: &str = "message.private";
pub const GROUP_MESSAGE: &str = "message.group";

pub const NOTICE: &str = "notice";
pub const GROUP_UPLOAD: &str = "notice.group_upload";
pub const GROUP_ADMIN: &str = "notice.group_admin";
pub const GROUP_DECREASE: &str = "notice.group_decrease";
pub const GROUP_INCREASE: &str = "notice.group_increase";
pub const GROUP_BAN: &str = "notice.group_ban";
pub const FRIEND_ADD: &str = "notice.friend_add";
pub const GROUP_RECALL: &str = "notice.group_recall";
pub const FRIEND_RECALL: &str = "notice.friend_recall";
pub const NOTIFY: &str = "notice.notify";
pub const NOTIFY_POKE: &str = "notice.notify.poke";
pub const NOTIFY_LUCKY_KING: &str = "notice.notify.lucky_king";
pub const NOTIFY_HONOR: &str = "notice.notify.honor";

pub const REQUEST: &str = "request";
pub const FRIEND_REQUEST: &str = "request.friend";
pub const GROUP_REQUEST: &str = "request.group";

pub const META: &str = "meta_event";
pub const LIFECYCLE: &str = "meta_event.lifecycle";
pub const HEARTBEAT: &str = "meta_event.heartbeat";
