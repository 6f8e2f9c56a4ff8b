/// unwrap a `CustomResult` inside a route, turning the error into the
/// matching http status.
macro_rules! handle_error_http {
    ( $data:expr, $target:expr, $type_str:expr ) => {
        match $data {
            Ok(e) => e,
            Err(error) if error.is_not_found() => {
                warn!(target:$target, "{} not found: {}", $type_str, error);
                return Err(Status::NotFound);
            }
            Err(error) => {
                error!(target:$target, "Error getting {}. (error: {})", $type_str, error);
                return Err(Status::InternalServerError);
            }
        }
    };
}

pub(crate) use handle_error_http;
