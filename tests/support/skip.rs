/// Skip a test if AWS credentials or a test secret are not configured.
#[macro_export]
macro_rules! skip_without_aws {
    () => {
        if std::env::var("AWS_ACCESS_KEY_ID").is_err() && std::env::var("AWS_PROFILE").is_err() {
            eprintln!("SKIPPED: neither AWS_ACCESS_KEY_ID nor AWS_PROFILE set");
            return;
        }
        if std::env::var("SMEDIT_TEST_SECRET_ID").is_err() {
            eprintln!("SKIPPED: SMEDIT_TEST_SECRET_ID not set (set to a disposable secret id)");
            return;
        }
    };
}
