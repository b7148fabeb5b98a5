pub fn render_index(date: &str, done_count: usize, total: usize, today_rate: u8) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{DONE}}", &done_count.to_string())
        .replace("{{TOTAL}}", &total.to_string())
        .replace("{{RATE}}", &today_rate.to_string())
}

pub fn render_dashboard(date: &str, total: usize) -> String {
    DASHBOARD_HTML
        .replace("{{DATE}}", date)
        .replace("{{TOTAL}}", &total.to_string())
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>HabitFlow</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #120c24;
      --bg-2: #2a1b52;
      --ink: #e8e4f5;
      --muted: #9a93b5;
      --accent: #8b5cf6;
      --accent-2: #ec4899;
      --done: #22c55e;
      --card: rgba(255, 255, 255, 0.05);
      --line: rgba(255, 255, 255, 0.09);
      --shadow: 0 24px 60px rgba(10, 6, 26, 0.55);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(160deg, var(--bg-1), #1a1034 65%, #120c24 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(560px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      border: 1px solid var(--line);
      padding: 32px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    nav a {
      color: var(--accent);
      font-weight: 600;
      text-decoration: none;
      font-size: 0.95rem;
    }

    .progress {
      display: flex;
      align-items: center;
      gap: 18px;
      background: rgba(255, 255, 255, 0.04);
      border: 1px solid var(--line);
      border-radius: 20px;
      padding: 16px 20px;
    }

    .ring {
      position: relative;
      width: 72px;
      height: 72px;
      flex-shrink: 0;
    }

    .ring svg {
      transform: rotate(-90deg);
    }

    .ring .pct {
      position: absolute;
      inset: 0;
      display: grid;
      place-items: center;
      font-weight: 600;
      font-size: 0.95rem;
    }

    .progress .summary {
      display: grid;
      gap: 4px;
    }

    .progress .summary strong {
      font-size: 1.05rem;
    }

    .progress .summary span {
      color: var(--muted);
      font-size: 0.85rem;
    }

    form.create {
      display: grid;
      gap: 12px;
      background: rgba(255, 255, 255, 0.04);
      border: 1px solid var(--line);
      border-radius: 20px;
      padding: 16px 20px;
    }

    form.create input[type="text"] {
      background: rgba(255, 255, 255, 0.06);
      border: 1px solid var(--line);
      border-radius: 12px;
      color: var(--ink);
      padding: 12px 14px;
      font-size: 1rem;
      font-family: inherit;
      outline: none;
    }

    form.create input[type="text"]:focus {
      border-color: var(--accent);
    }

    .picker {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .picker .option {
      appearance: none;
      border: 1px solid var(--line);
      background: rgba(255, 255, 255, 0.05);
      border-radius: 10px;
      width: 38px;
      height: 38px;
      font-size: 1.1rem;
      cursor: pointer;
      display: grid;
      place-items: center;
      padding: 0;
    }

    .picker .option.selected {
      border-color: var(--accent);
      background: rgba(139, 92, 246, 0.25);
    }

    .picker .swatch {
      border-radius: 999px;
      width: 30px;
      height: 30px;
    }

    .picker .swatch.selected {
      outline: 2px solid white;
      outline-offset: 2px;
    }

    button.primary {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 13px 20px;
      font-size: 1rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      background: linear-gradient(90deg, var(--accent), var(--accent-2));
      color: white;
      box-shadow: 0 10px 24px rgba(139, 92, 246, 0.35);
      transition: transform 150ms ease;
    }

    button.primary:active {
      transform: scale(0.98);
    }

    .habits {
      display: grid;
      gap: 12px;
    }

    .habit {
      display: flex;
      align-items: center;
      gap: 14px;
      background: rgba(255, 255, 255, 0.04);
      border: 1px solid var(--line);
      border-radius: 18px;
      padding: 14px 16px;
    }

    .habit.done {
      border-color: rgba(34, 197, 94, 0.4);
    }

    .habit .check {
      appearance: none;
      flex-shrink: 0;
      width: 40px;
      height: 40px;
      border-radius: 12px;
      border: 2px solid var(--muted);
      background: transparent;
      color: white;
      font-size: 1.1rem;
      cursor: pointer;
      transition: transform 120ms ease;
    }

    .habit .check:active {
      transform: scale(0.9);
    }

    .habit.done .check {
      border-color: var(--done);
      background: var(--done);
    }

    .habit .info {
      flex: 1;
      min-width: 0;
      display: grid;
      gap: 2px;
    }

    .habit .info .name {
      font-weight: 600;
      overflow: hidden;
      text-overflow: ellipsis;
      white-space: nowrap;
    }

    .habit.done .info .name {
      color: var(--muted);
      text-decoration: line-through;
    }

    .habit .info .meta {
      font-size: 0.8rem;
      color: var(--muted);
    }

    .habit .week {
      display: flex;
      gap: 4px;
    }

    .habit .week i {
      width: 8px;
      height: 8px;
      border-radius: 999px;
      background: rgba(255, 255, 255, 0.14);
    }

    .habit .remove {
      appearance: none;
      border: none;
      background: rgba(239, 68, 68, 0.12);
      color: #f87171;
      border-radius: 10px;
      width: 32px;
      height: 32px;
      cursor: pointer;
      font-size: 0.95rem;
    }

    .empty {
      text-align: center;
      color: var(--muted);
      padding: 28px 0;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #f87171;
    }

    .status[data-type="ok"] {
      color: #4ade80;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 26px 20px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>HabitFlow</h1>
        <p class="subtitle" id="date">{{DATE}}</p>
      </div>
      <nav><a href="/dashboard">Dashboard →</a></nav>
    </header>

    <section class="progress">
      <div class="ring">
        <svg width="72" height="72" viewBox="0 0 72 72">
          <circle cx="36" cy="36" r="31" fill="none" stroke="rgba(139,92,246,0.15)" stroke-width="7" />
          <circle id="ring-arc" cx="36" cy="36" r="31" fill="none" stroke="url(#ring-gradient)"
            stroke-width="7" stroke-linecap="round" stroke-dasharray="0 194.8" />
          <defs>
            <linearGradient id="ring-gradient" x1="0%" y1="0%" x2="100%" y2="0%">
              <stop offset="0%" stop-color="#8b5cf6" />
              <stop offset="100%" stop-color="#ec4899" />
            </linearGradient>
          </defs>
        </svg>
        <span class="pct" id="ring-pct">{{RATE}}%</span>
      </div>
      <div class="summary">
        <strong><span id="done-count">{{DONE}}</span> of <span id="total-count">{{TOTAL}}</span> done today</strong>
        <span id="cheer">Keep the chain going.</span>
      </div>
    </section>

    <form class="create" id="create-form" autocomplete="off">
      <input type="text" id="name-input" name="name" placeholder="New habit..." maxlength="30" />
      <div class="picker" id="emoji-picker" aria-label="Icon"></div>
      <div class="picker" id="color-picker" aria-label="Color"></div>
      <button class="primary" type="submit">Add habit</button>
    </form>

    <section class="habits" id="habit-list"></section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const EMOJIS = ['💪', '📚', '🏃', '💧', '🧘', '✍️', '🎯', '💤', '🥗', '🎵', '🚶', '🧠'];
    const COLORS = ['#8b5cf6', '#ec4899', '#f59e0b', '#10b981', '#3b82f6', '#ef4444', '#06b6d4', '#f97316'];
    const RING_CIRCUMFERENCE = 194.8;

    const statusEl = document.getElementById('status');
    const listEl = document.getElementById('habit-list');
    const nameInput = document.getElementById('name-input');
    const emojiPicker = document.getElementById('emoji-picker');
    const colorPicker = document.getElementById('color-picker');

    let selectedEmoji = EMOJIS[0];
    let selectedColor = COLORS[0];

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const flashStatus = (message) => {
      setStatus(message, 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const buildPickers = () => {
      EMOJIS.forEach((emoji) => {
        const button = document.createElement('button');
        button.type = 'button';
        button.className = 'option' + (emoji === selectedEmoji ? ' selected' : '');
        button.textContent = emoji;
        button.addEventListener('click', () => {
          selectedEmoji = emoji;
          emojiPicker.querySelectorAll('.option').forEach((el) => {
            el.classList.toggle('selected', el.textContent === emoji);
          });
        });
        emojiPicker.appendChild(button);
      });

      COLORS.forEach((color) => {
        const button = document.createElement('button');
        button.type = 'button';
        button.className = 'option swatch' + (color === selectedColor ? ' selected' : '');
        button.style.backgroundColor = color;
        button.addEventListener('click', () => {
          selectedColor = color;
          colorPicker.querySelectorAll('.swatch').forEach((el) => {
            el.classList.toggle('selected', el.style.backgroundColor === button.style.backgroundColor);
          });
        });
        colorPicker.appendChild(button);
      });
    };

    const renderProgress = (data) => {
      document.getElementById('date').textContent = data.date;
      document.getElementById('done-count').textContent = data.done_count;
      document.getElementById('total-count').textContent = data.total;
      document.getElementById('ring-pct').textContent = data.today_rate + '%';
      document.getElementById('ring-arc').setAttribute(
        'stroke-dasharray',
        (data.today_rate / 100) * RING_CIRCUMFERENCE + ' ' + RING_CIRCUMFERENCE
      );
      const cheer = document.getElementById('cheer');
      if (data.total === 0) {
        cheer.textContent = 'Add your first habit below.';
      } else if (data.today_rate === 100) {
        cheer.textContent = '🎉 Perfect day!';
      } else if (data.today_rate >= 50) {
        cheer.textContent = '💪 Almost there!';
      } else {
        cheer.textContent = 'Keep the chain going.';
      }
    };

    const renderHabit = (habit) => {
      const row = document.createElement('div');
      row.className = 'habit' + (habit.done_today ? ' done' : '');

      const check = document.createElement('button');
      check.className = 'check';
      check.type = 'button';
      check.textContent = habit.done_today ? '✓' : '';
      check.addEventListener('click', () => {
        toggle(habit.id).catch((err) => setStatus(err.message, 'error'));
      });

      const info = document.createElement('div');
      info.className = 'info';
      const name = document.createElement('span');
      name.className = 'name';
      name.textContent = habit.emoji + ' ' + habit.name;
      const meta = document.createElement('span');
      meta.className = 'meta';
      const parts = [habit.rate + '% this week'];
      if (habit.streak > 0) {
        parts.push('🔥 ' + habit.streak + (habit.streak === 1 ? ' day' : ' days'));
      }
      meta.textContent = parts.join(' · ');
      info.appendChild(name);
      info.appendChild(meta);

      const week = document.createElement('div');
      week.className = 'week';
      habit.week.forEach((cell) => {
        const dot = document.createElement('i');
        if (cell.done) {
          dot.style.backgroundColor = habit.color;
        }
        dot.title = cell.label + ' ' + cell.date;
        week.appendChild(dot);
      });

      const remove = document.createElement('button');
      remove.className = 'remove';
      remove.type = 'button';
      remove.textContent = '✕';
      remove.title = 'Delete habit';
      remove.addEventListener('click', () => {
        destroy(habit.id).catch((err) => setStatus(err.message, 'error'));
      });

      row.appendChild(check);
      row.appendChild(info);
      row.appendChild(week);
      row.appendChild(remove);
      return row;
    };

    const renderList = (data) => {
      listEl.innerHTML = '';
      if (data.habits.length === 0) {
        const empty = document.createElement('div');
        empty.className = 'empty';
        empty.textContent = '🌱 No habits yet';
        listEl.appendChild(empty);
        return;
      }
      data.habits.forEach((habit) => listEl.appendChild(renderHabit(habit)));
    };

    const refresh = async () => {
      const res = await fetch('/api/habits');
      if (!res.ok) {
        throw new Error('Unable to load habits');
      }
      const data = await res.json();
      renderProgress(data);
      renderList(data);
    };

    const toggle = async (id) => {
      const res = await fetch('/api/habits/' + encodeURIComponent(id) + '/toggle', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({})
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      await refresh();
    };

    const destroy = async (id) => {
      const res = await fetch('/api/habits/' + encodeURIComponent(id), { method: 'DELETE' });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      await refresh();
      flashStatus('Deleted');
    };

    const create = async () => {
      const name = nameInput.value.trim();
      if (!name) {
        setStatus('Give the habit a name first.', 'error');
        return;
      }
      const res = await fetch('/api/habits', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ name, emoji: selectedEmoji, color: selectedColor })
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      nameInput.value = '';
      await refresh();
      flashStatus('Saved');
    };

    document.getElementById('create-form').addEventListener('submit', (event) => {
      event.preventDefault();
      create().catch((err) => setStatus(err.message, 'error'));
    });

    buildPickers();
    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;

const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>HabitFlow · Dashboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #120c24;
      --bg-2: #2a1b52;
      --ink: #e8e4f5;
      --muted: #9a93b5;
      --accent: #8b5cf6;
      --accent-2: #3b82f6;
      --card: rgba(255, 255, 255, 0.05);
      --line: rgba(255, 255, 255, 0.09);
      --shadow: 0 24px 60px rgba(10, 6, 26, 0.55);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(160deg, var(--bg-1), #1a1034 65%, #120c24 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(640px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      border: 1px solid var(--line);
      padding: 32px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    nav a {
      color: var(--accent);
      font-weight: 600;
      text-decoration: none;
      font-size: 0.95rem;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.1rem;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(130px, 1fr));
      gap: 12px;
    }

    .card {
      background: rgba(255, 255, 255, 0.04);
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 14px;
      display: grid;
      gap: 6px;
    }

    .card .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .card .value {
      font-size: 1.6rem;
      font-weight: 600;
    }

    .panel {
      background: rgba(255, 255, 255, 0.04);
      border: 1px solid var(--line);
      border-radius: 20px;
      padding: 18px;
    }

    .heatmap {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .heatmap .head {
      text-align: center;
      font-size: 0.7rem;
      color: var(--muted);
    }

    .heatmap .cell {
      aspect-ratio: 1;
      border-radius: 6px;
      background: rgba(255, 255, 255, 0.08);
    }

    .heatmap .cell[data-tier="1"] { background: rgba(59, 130, 246, 0.3); }
    .heatmap .cell[data-tier="2"] { background: rgba(59, 130, 246, 0.6); }
    .heatmap .cell[data-tier="3"] { background: #3b82f6; }
    .heatmap .cell.best { outline: 2px solid #f59e0b; }

    .legend {
      display: flex;
      align-items: center;
      justify-content: flex-end;
      gap: 6px;
      margin-top: 10px;
      font-size: 0.7rem;
      color: var(--muted);
    }

    .legend i {
      width: 12px;
      height: 12px;
      border-radius: 3px;
      display: inline-block;
    }

    .trend {
      display: grid;
      gap: 10px;
    }

    .trend .week {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .trend .week .label {
      width: 72px;
      text-align: right;
      font-size: 0.8rem;
      color: var(--muted);
    }

    .trend .week .bar {
      flex: 1;
      height: 22px;
      background: rgba(255, 255, 255, 0.06);
      border-radius: 8px;
      overflow: hidden;
    }

    .trend .week .fill {
      height: 100%;
      border-radius: 8px;
      background: linear-gradient(90deg, #3b82f6, #06b6d4);
      transition: width 600ms ease;
    }

    .trend .week .pct {
      width: 44px;
      font-size: 0.85rem;
      font-weight: 600;
    }

    .rows {
      display: grid;
      gap: 10px;
    }

    .row {
      display: flex;
      align-items: center;
      gap: 12px;
      background: rgba(255, 255, 255, 0.04);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 10px 14px;
    }

    .row .badge {
      width: 38px;
      height: 38px;
      border-radius: 12px;
      display: grid;
      place-items: center;
      font-size: 1.1rem;
      flex-shrink: 0;
    }

    .row .info {
      flex: 1;
      min-width: 0;
      display: grid;
      gap: 2px;
    }

    .row .info .name {
      font-weight: 600;
      font-size: 0.95rem;
      overflow: hidden;
      text-overflow: ellipsis;
      white-space: nowrap;
    }

    .row .info .meta {
      font-size: 0.78rem;
      color: var(--muted);
    }

    .row .bar {
      width: 70px;
      height: 8px;
      background: rgba(255, 255, 255, 0.08);
      border-radius: 999px;
      overflow: hidden;
      flex-shrink: 0;
    }

    .row .bar .fill {
      height: 100%;
      border-radius: 999px;
    }

    .empty {
      text-align: center;
      color: var(--muted);
      padding: 20px 0;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #f87171;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Dashboard</h1>
        <p class="subtitle">{{DATE}} · {{TOTAL}} habits</p>
      </div>
      <nav><a href="/">← Today</a></nav>
    </header>

    <section class="cards">
      <div class="card">
        <span class="label">Today</span>
        <span class="value" id="stat-today" style="color: #3b82f6">--</span>
      </div>
      <div class="card">
        <span class="label">Week avg</span>
        <span class="value" id="stat-week" style="color: #06b6d4">--</span>
      </div>
      <div class="card">
        <span class="label">Best streak</span>
        <span class="value" id="stat-streak" style="color: #f97316">--</span>
      </div>
      <div class="card">
        <span class="label">Total done</span>
        <span class="value" id="stat-total" style="color: #22c55e">--</span>
      </div>
    </section>

    <section class="panel">
      <h2>Activity (28 days)</h2>
      <div class="heatmap" id="heatmap"></div>
      <div class="legend">
        <span>Less</span>
        <i style="background: rgba(255,255,255,0.08)"></i>
        <i style="background: rgba(59,130,246,0.3)"></i>
        <i style="background: rgba(59,130,246,0.6)"></i>
        <i style="background: #3b82f6"></i>
        <span>More</span>
      </div>
    </section>

    <section class="panel">
      <h2>Weekly trend</h2>
      <div class="trend" id="trend"></div>
    </section>

    <section>
      <h2>Per habit</h2>
      <div class="rows" id="habit-rows"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const WEEKDAYS = ['S', 'M', 'T', 'W', 'T', 'F', 'S'];

    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const tierFor = (ratio) => {
      if (ratio === 0) return 0;
      if (ratio < 0.5) return 1;
      if (ratio < 1) return 2;
      return 3;
    };

    const renderOverview = (overview) => {
      document.getElementById('stat-today').textContent = overview.today_rate + '%';
      document.getElementById('stat-week').textContent = overview.week_rate + '%';
      document.getElementById('stat-streak').textContent = overview.best_streak + 'd';
      document.getElementById('stat-total').textContent = overview.total_completions;
    };

    const renderHeatmap = (days, bestDay) => {
      const grid = document.getElementById('heatmap');
      grid.innerHTML = '';
      days.slice(0, 7).forEach((day) => {
        const head = document.createElement('span');
        head.className = 'head';
        head.textContent = WEEKDAYS[day.weekday];
        grid.appendChild(head);
      });
      days.forEach((day, index) => {
        const cell = document.createElement('div');
        cell.className = 'cell' + (index === bestDay ? ' best' : '');
        cell.dataset.tier = tierFor(day.ratio);
        cell.title = day.date + ': ' + Math.round(day.ratio * 100) + '%';
        grid.appendChild(cell);
      });
    };

    const renderTrend = (weeks) => {
      const trend = document.getElementById('trend');
      trend.innerHTML = '';
      weeks.forEach((week) => {
        const row = document.createElement('div');
        row.className = 'week';

        const label = document.createElement('span');
        label.className = 'label';
        label.textContent = week.label;

        const bar = document.createElement('div');
        bar.className = 'bar';
        const fill = document.createElement('div');
        fill.className = 'fill';
        fill.style.width = week.rate + '%';
        bar.appendChild(fill);

        const pct = document.createElement('span');
        pct.className = 'pct';
        pct.textContent = week.rate + '%';

        row.appendChild(label);
        row.appendChild(bar);
        row.appendChild(pct);
        trend.appendChild(row);
      });
    };

    const renderRows = (habits) => {
      const rows = document.getElementById('habit-rows');
      rows.innerHTML = '';
      if (habits.length === 0) {
        const empty = document.createElement('div');
        empty.className = 'empty';
        empty.textContent = 'No habits to report on yet.';
        rows.appendChild(empty);
        return;
      }
      habits.forEach((habit) => {
        const row = document.createElement('div');
        row.className = 'row';

        const badge = document.createElement('div');
        badge.className = 'badge';
        badge.style.backgroundColor = habit.color + '33';
        badge.textContent = habit.emoji;

        const info = document.createElement('div');
        info.className = 'info';
        const name = document.createElement('span');
        name.className = 'name';
        name.textContent = habit.name;
        const meta = document.createElement('span');
        meta.className = 'meta';
        const parts = [habit.rate + '% this week'];
        if (habit.streak > 0) {
          parts.push('🔥 ' + habit.streak + 'd streak');
        }
        meta.textContent = parts.join(' · ');
        info.appendChild(name);
        info.appendChild(meta);

        const bar = document.createElement('div');
        bar.className = 'bar';
        const fill = document.createElement('div');
        fill.className = 'fill';
        fill.style.width = habit.rate + '%';
        fill.style.backgroundColor = habit.color;
        bar.appendChild(fill);

        row.appendChild(badge);
        row.appendChild(info);
        row.appendChild(bar);
        rows.appendChild(row);
      });
    };

    const load = async () => {
      const res = await fetch('/api/dashboard');
      if (!res.ok) {
        throw new Error('Unable to load dashboard');
      }
      const data = await res.json();
      renderOverview(data.overview);
      renderHeatmap(data.heatmap, data.best_day);
      renderTrend(data.weekly_trend);
      renderRows(data.habits);
    };

    load().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
