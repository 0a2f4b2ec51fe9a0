// routes/home.rs
// GET / -> built-in page with TOTP and HOTP forms posting JSON to /api/*.
// GET /health -> liveness probe.

use axum::response::Html;

pub async fn health() -> &'static str {
    "OK"
}

pub async fn home() -> Html<&'static str> {
    Html(r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>OTP Generator</title>
</head>
<body>
  <main>
    <form id="totp-form">
      <label>
        Secret
        <input name="secret" autocomplete="off" required>
      </label>
      <button type="submit">TOTP</button>
      <span id="countdown"></span>
    </form>
    <form id="hotp-form">
      <label>
        Secret
        <input name="secret" autocomplete="off" required>
      </label>
      <label>
        Counter
        <input name="counter" inputmode="numeric" pattern="\d*" value="0" required>
      </label>
      <button type="submit">HOTP</button>
    </form>
    <pre id="result"></pre>
  </main>
  <script>
    const result = document.getElementById('result');
    const countdown = document.getElementById('countdown');

    async function post(path, body) {
      try {
        const response = await fetch(path, {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(body)
        });
        const json = await response.json();
        result.textContent = JSON.stringify(json, null, 2);
        return json;
      } catch (err) {
        result.textContent = 'Request failed';
        return null;
      }
    }

    document.getElementById('totp-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const json = await post('/api/totp', { secret: event.target.secret.value });
      countdown.textContent = json && json.status ? `${json.data.timeRemaining}s` : '';
    });

    document.getElementById('hotp-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      await post('/api/hotp', {
        secret: event.target.secret.value,
        counter: event.target.counter.value.trim()
      });
    });
  </script>
</body>
</html>
"#)
}
