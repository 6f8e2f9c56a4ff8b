use redis::{Client, Commands, Connection, FromRedisValue, RedisResult, ToRedisArgs};

pub struct Redis {}

impl Redis {
    pub fn connect(client: &Client) -> RedisResult<Connection> {
        client.get_connection()
    }

    /// store `data` under `key` for `seconds`
    pub fn set_data_ex<K: ToRedisArgs, D: ToRedisArgs>(conn: &mut Connection, key: K, data: D, seconds: usize) -> RedisResult<()> {
        conn.set_ex::<K, D, ()>(key, data, seconds)
    }

    pub fn get_data<K: ToRedisArgs, D: FromRedisValue>(conn: &mut Connection, key: K) -> RedisResult<Option<D>> {
        conn.get::<K, Option<D>>(key)
    }
}
