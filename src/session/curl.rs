use reqwest::Request;

/// Renders a built request as an equivalent `curl` command line.
#[must_use]
pub fn to_curl(request: &Request) -> String {
    let mut parts = vec![
        "curl".to_owned(),
        "-X".to_owned(),
        request.method().as_str().to_owned(),
    ];

    for (name, value) in request.headers() {
        let value = String::from_utf8_lossy(value.as_bytes());
        parts.push("-H".to_owned());
        parts.push(shell_quote(&format!("{}: {}", name.as_str(), value)));
    }

    if let Some(bytes) = request.body().and_then(reqwest::Body::as_bytes)
        && !bytes.is_empty()
    {
        parts.push("-d".to_owned());
        parts.push(shell_quote(&String::from_utf8_lossy(bytes)));
    }

    parts.push(shell_quote(request.url().as_str()));
    parts.join(" ")
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
