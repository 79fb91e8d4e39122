pub const QUERY_GET_BOT_BY_TOKEN: &str = r#"
SELECT
    id,name,token,created_at
FROM bot
WHERE token=$1;
"#;

pub const QUERY_GET_BOT_BY_ID: &str = r#"
SELECT
    id,name,token,created_at
FROM bot
WHERE id=$1;
"#;

pub const QUERY_GET_CHAT: &str = r#"
SELECT
    id,bot_id,chat_id,name,created_at
FROM chat
WHERE bot_id=$1 AND chat_id=$2;
"#;

pub const QUERY_INSERT_CHAT_IF_ABSENT: &str = r#"
INSERT INTO chat (
    bot_id,chat_id,name,created_at
) VALUES($1,$2,$3,$4)
ON CONFLICT(bot_id,chat_id) DO NOTHING
RETURNING id,bot_id,chat_id,name,created_at;
"#;
