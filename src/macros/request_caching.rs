/// check if a request is in the cache, if it is, return it wrapped in
/// `$respond`. else follow the normal flow.
///
/// does nothing when the cache is disabled. a failing cache is logged and
/// treated as a miss.
macro_rules! read_cache_request {
    ( $state:expr, $origin:expr, $respond:expr, $target:expr ) => {
        if let Some(cache) = &$state.cache {
            let uri = $origin.to_string();
            match cache.get(&uri) {
                Ok(Some(payload)) => {
                    debug!(target:$target, "cache hit for {}", uri);
                    return Ok($respond(payload));
                }
                Ok(None) => {}
                Err(error) => {
                    warn!(target:$target, "Error reading {} from the cache: {}", uri, error);
                }
            }
        }
    };
}

/// add the response to the request to the cache and then return it.
///
/// the payload is returned even when it could not be cached.
macro_rules! cache_response {
    ( $state:expr, $origin:expr, $payload:expr, $respond:expr, $target:expr ) => {
        let payload: String = $payload;
        if let Some(cache) = &$state.cache {
            let uri = $origin.to_string();
            if let Err(error) = cache.put(&uri, payload.clone()) {
                warn!(target:$target, "Error storing {} in the cache: {}", uri, error);
            }
        }

        return Ok($respond(payload))
    };
}

pub(crate) use cache_response;
pub(crate) use read_cache_request;
