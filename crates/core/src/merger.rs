use crate::merge_request::MergeRequest;
use crate::tokens::{dedupe, is_managed_token, tokenize};

/// Property key in `gradle.properties` that holds the daemon JVM args.
pub const JVM_ARGS_KEY: &str = "org.gradle.jvmargs";

/// Merge an existing `org.gradle.jvmargs` value with the requested settings.
///
/// The result always starts with `-Xmx{xmx} -XX:MaxMetaspaceSize={max_metaspace}`.
/// Unmanaged tokens from `existing` follow when `request.merge` is set, then
/// `request.extra_args`. Duplicates are collapsed with the first occurrence winning,
/// so an extra arg can never override a managed flag.
#[must_use]
pub fn merge_jvm_args(existing: Option<&str>, request: &MergeRequest) -> String {
    let mut tokens = vec![
        format!("-Xmx{}", request.xmx),
        format!("-XX:MaxMetaspaceSize={}", request.max_metaspace),
    ];

    if request.merge {
        tokens.extend(
            tokenize(existing)
                .into_iter()
                .filter(|token| !is_managed_token(token)),
        );
    }

    tokens.extend(request.extra_args.iter().cloned());

    dedupe(tokens).join(" ")
}
