pub const GAME_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Tap the Tree</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #0f1a30;
      --bg-2: #2d1b69;
      --ink: #f4f6fb;
      --accent: #ff3366;
      --accent-2: #33ccff;
      --gold: #ffcc00;
      --card: rgba(255, 255, 255, 0.08);
      --shadow: 0 24px 60px rgba(5, 10, 25, 0.55);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(160deg, var(--bg-1), #14213d 70%, var(--bg-1));
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border: 1px solid rgba(255, 255, 255, 0.18);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
      text-align: center;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
      color: var(--gold);
    }

    .subtitle {
      margin: 0;
      color: #aeb6cc;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      gap: 14px;
    }

    .hidden {
      display: none;
    }

    input {
      width: 100%;
      padding: 12px 14px;
      border-radius: 12px;
      border: 1px solid rgba(255, 255, 255, 0.25);
      background: rgba(255, 255, 255, 0.1);
      color: var(--ink);
      font: inherit;
    }

    input::placeholder {
      color: #8b93ab;
    }

    button {
      padding: 12px 18px;
      border: none;
      border-radius: 14px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      color: #101528;
      background: var(--accent-2);
      transition: transform 120ms ease, filter 120ms ease;
    }

    button:hover {
      filter: brightness(1.1);
      transform: translateY(-1px);
    }

    button.secondary {
      background: rgba(255, 255, 255, 0.18);
      color: var(--ink);
    }

    .tree-button {
      font-size: 4.5rem;
      line-height: 1;
      padding: 28px;
      border-radius: 50%;
      background: radial-gradient(circle at 30% 30%, #2f9e44, #1b5e20);
      justify-self: center;
      box-shadow: 0 18px 40px rgba(27, 94, 32, 0.45);
    }

    .tree-button:active {
      transform: scale(0.94);
    }

    .score-row {
      display: flex;
      justify-content: center;
      align-items: baseline;
      gap: 12px;
    }

    .score-label {
      color: #aeb6cc;
    }

    .score-value {
      font-size: 2.4rem;
      font-weight: 600;
      color: var(--gold);
    }

    .board {
      display: grid;
      gap: 8px;
    }

    .board h2 {
      margin: 0 0 6px;
      font-size: 1.2rem;
      color: var(--accent-2);
    }

    .board-row {
      display: flex;
      justify-content: space-between;
      padding: 10px 14px;
      border-radius: 12px;
      background: rgba(255, 255, 255, 0.07);
    }

    .board-row.me {
      border: 1px solid var(--gold);
    }

    .board-rank {
      width: 2.2rem;
      color: var(--accent);
      font-weight: 600;
    }

    .board-name {
      flex: 1;
    }

    .board-score {
      color: var(--gold);
      font-weight: 600;
    }

    .status {
      min-height: 1.2rem;
      text-align: center;
      font-size: 0.95rem;
    }

    .status.error {
      color: var(--accent);
    }

    .status.ok {
      color: #69db7c;
    }

    .auth-actions {
      display: flex;
      gap: 10px;
    }

    .auth-actions button {
      flex: 1;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>🎄 Tap the Tree 🎄</h1>
      <p class="subtitle">Tap the tree, climb the top-10.</p>
    </header>

    <section id="auth" class="panel">
      <input id="username" placeholder="Username (3+ characters)" autocomplete="username" />
      <input id="password" type="password" placeholder="Password (4+ characters)" autocomplete="current-password" />
      <div class="auth-actions">
        <button id="login-btn">Log in</button>
        <button id="register-btn" class="secondary">Register</button>
      </div>
    </section>

    <section id="game" class="panel hidden">
      <div class="score-row">
        <span class="score-label">Your score:</span>
        <span class="score-value" id="score">0</span>
      </div>
      <button class="tree-button" id="tap-btn" aria-label="Tap the tree">🎄</button>
      <button id="logout-btn" class="secondary">Log out</button>
    </section>

    <p id="status" class="status"></p>

    <section class="board">
      <h2>🏆 Top 10</h2>
      <div id="board-list"></div>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const authPanel = document.getElementById('auth');
    const gamePanel = document.getElementById('game');
    const scoreEl = document.getElementById('score');
    const boardList = document.getElementById('board-list');

    let currentUser = null;

    const setStatus = (message, kind) => {
      statusEl.textContent = message;
      statusEl.className = `status ${kind || ''}`;
    };

    const request = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error(await res.text());
      }
      return res.json();
    };

    const credentials = () => ({
      username: document.getElementById('username').value.trim(),
      password: document.getElementById('password').value,
    });

    const enterGame = async (username) => {
      currentUser = username;
      authPanel.classList.add('hidden');
      gamePanel.classList.remove('hidden');
      const user = await request(`/user/${encodeURIComponent(username)}`);
      scoreEl.textContent = user.score;
      await loadBoard();
    };

    const loadBoard = async () => {
      const board = await request('/leaderboard');
      if (board.length === 0) {
        boardList.innerHTML = '<div class="board-row">No players yet</div>';
        return;
      }
      boardList.innerHTML = board
        .map((entry, index) => {
          const medal = ['🥇', '🥈', '🥉'][index] || `${index + 1}.`;
          const me = entry.username === currentUser ? ' me' : '';
          return `<div class="board-row${me}">
            <span class="board-rank">${medal}</span>
            <span class="board-name">${entry.username}</span>
            <span class="board-score">${entry.score} 🎄</span>
          </div>`;
        })
        .join('');
    };

    document.getElementById('register-btn').addEventListener('click', async () => {
      try {
        const body = JSON.stringify(credentials());
        await request('/register', { method: 'POST', headers: { 'Content-Type': 'application/json' }, body });
        setStatus('Registered! Tap away.', 'ok');
        await enterGame(credentials().username);
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('login-btn').addEventListener('click', async () => {
      try {
        const body = JSON.stringify(credentials());
        await request('/login', { method: 'POST', headers: { 'Content-Type': 'application/json' }, body });
        setStatus('Welcome back!', 'ok');
        await enterGame(credentials().username);
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('tap-btn').addEventListener('click', async () => {
      try {
        const body = JSON.stringify({ username: currentUser });
        const result = await request('/api/tap', { method: 'POST', headers: { 'Content-Type': 'application/json' }, body });
        scoreEl.textContent = result.score;
        await loadBoard();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('logout-btn').addEventListener('click', () => {
      currentUser = null;
      gamePanel.classList.add('hidden');
      authPanel.classList.remove('hidden');
      setStatus('', '');
      loadBoard().catch((err) => setStatus(err.message, 'error'));
    });

    loadBoard().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
