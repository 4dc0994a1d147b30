/// Fills the first-paint placeholders; everything else renders client-side
/// from the JSON API.
pub fn render_index(balance: i64, tank_level_percent: u8) -> String {
    INDEX_HTML
        .replace("{{BALANCE}}", &balance.to_string())
        .replace("{{TANK_LEVEL}}", &tank_level_percent.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>WaterWise</title>
  <style>
    :root {
      --bg-1: #eef7fb;
      --bg-2: #bfe3f2;
      --ink: #15303d;
      --primary: #0e7fb0;
      --success: #2d7a4b;
      --warning: #b97a14;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 18px 48px rgba(14, 127, 176, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(135deg, var(--bg-1), #e2f2ea 65%, #eef7fb 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    header .subtitle {
      margin: 4px 0 0;
      color: #4f6b78;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(14, 127, 176, 0.1);
      border-radius: 999px;
      flex-wrap: wrap;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 9px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      color: #4f6b78;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--primary);
      box-shadow: 0 8px 16px rgba(14, 127, 176, 0.16);
    }

    section[data-view] {
      display: none;
    }

    section[data-view].active {
      display: grid;
      gap: 18px;
    }

    .view-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .view-header h2 {
      margin: 0;
    }

    .speak-btn {
      border: 1px solid rgba(14, 127, 176, 0.3);
      background: rgba(14, 127, 176, 0.08);
      color: var(--primary);
      border-radius: 999px;
      width: 40px;
      height: 40px;
      font-size: 1.05rem;
      cursor: pointer;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(14, 127, 176, 0.1);
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #7b8d97;
    }

    .stat .value {
      display: block;
      font-size: 1.5rem;
      font-weight: 700;
      color: var(--primary);
    }

    .stat .value.good { color: var(--success); }
    .stat .value.warn { color: var(--warning); }
    .stat .value.bad { color: var(--danger); }

    .filters {
      display: flex;
      gap: 8px;
      flex-wrap: wrap;
    }

    .filter-btn {
      border: 1px solid rgba(14, 127, 176, 0.3);
      background: white;
      color: var(--ink);
      border-radius: 999px;
      padding: 7px 14px;
      font-size: 0.85rem;
      cursor: pointer;
    }

    .filter-btn.active {
      background: var(--primary);
      border-color: var(--primary);
      color: white;
    }

    .list {
      display: grid;
      gap: 10px;
    }

    .row {
      background: white;
      border: 1px solid rgba(14, 127, 176, 0.12);
      border-radius: 14px;
      padding: 14px 16px;
      display: grid;
      gap: 6px;
    }

    .row.dimmed {
      opacity: 0.6;
    }

    .row .top {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
      flex-wrap: wrap;
    }

    .row .title {
      font-weight: 700;
    }

    .row .meta {
      font-size: 0.82rem;
      color: #6c7f8a;
    }

    .badge {
      display: inline-block;
      border-radius: 999px;
      padding: 2px 10px;
      font-size: 0.75rem;
      font-weight: 700;
      border: 1px solid currentColor;
    }

    .badge.info { color: var(--primary); }
    .badge.success { color: var(--success); }
    .badge.warning { color: var(--warning); }
    .badge.error { color: var(--danger); }

    .amount.pos { color: var(--success); font-weight: 700; }
    .amount.neg { color: var(--warning); font-weight: 700; }

    form.panel {
      background: white;
      border: 1px solid rgba(14, 127, 176, 0.12);
      border-radius: 16px;
      padding: 16px;
      display: grid;
      gap: 10px;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      align-items: end;
    }

    form.panel label {
      display: grid;
      gap: 4px;
      font-size: 0.8rem;
      color: #4f6b78;
    }

    form.panel input,
    form.panel select {
      padding: 8px 10px;
      border: 1px solid rgba(14, 127, 176, 0.25);
      border-radius: 10px;
      font-size: 0.9rem;
    }

    .btn {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.9rem;
      font-weight: 700;
      cursor: pointer;
      background: var(--primary);
      color: white;
    }

    .btn.ghost {
      background: white;
      color: var(--primary);
      border: 1px solid rgba(14, 127, 176, 0.3);
    }

    .gauge {
      width: 180px;
      height: 180px;
      border-radius: 50%;
      display: grid;
      place-items: center;
      margin: 0 auto;
      background: conic-gradient(var(--primary) calc(var(--level) * 1%), rgba(14, 127, 176, 0.12) 0);
    }

    .gauge .inner {
      width: 132px;
      height: 132px;
      border-radius: 50%;
      background: white;
      display: grid;
      place-items: center;
      text-align: center;
    }

    .gauge .inner strong {
      font-size: 1.7rem;
      color: var(--primary);
    }

    .progress {
      height: 8px;
      border-radius: 999px;
      background: rgba(14, 127, 176, 0.12);
      overflow: hidden;
    }

    .progress span {
      display: block;
      height: 100%;
      background: var(--success);
    }

    .status {
      position: fixed;
      bottom: 24px;
      left: 50%;
      transform: translateX(-50%);
      background: var(--ink);
      color: white;
      border-radius: 12px;
      padding: 10px 18px;
      font-size: 0.9rem;
      opacity: 0;
      pointer-events: none;
      transition: opacity 200ms ease;
    }

    .status.visible {
      opacity: 1;
    }

    .status.error {
      background: var(--danger);
    }

    .empty {
      text-align: center;
      color: #6c7f8a;
      padding: 24px 0;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>WaterWise</h1>
      <p class="subtitle">Smart rainwater harvesting for sustainable living</p>
    </header>

    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="dashboard">Dashboard</button>
      <button class="tab" type="button" data-tab="transactions">Transactions</button>
      <button class="tab" type="button" data-tab="maintenance">Maintenance</button>
      <button class="tab" type="button" data-tab="alerts">Alerts</button>
      <button class="tab" type="button" data-tab="achievements">Achievements</button>
      <button class="tab" type="button" data-tab="learn">Learn</button>
    </div>

    <section data-view="dashboard" class="active">
      <div class="view-header">
        <h2>Water Tank Status</h2>
        <button class="speak-btn" type="button" data-speak="dashboard" title="Read aloud">&#128266;</button>
      </div>
      <div class="gauge" id="tank-gauge" style="--level: {{TANK_LEVEL}}">
        <div class="inner">
          <div>
            <strong id="tank-percent">{{TANK_LEVEL}}%</strong>
            <div class="meta" id="tank-liters">{{BALANCE}} L available</div>
          </div>
        </div>
      </div>
      <div class="cards">
        <div class="stat"><span class="label">Total Harvested</span><span class="value good" id="dash-harvested">--</span></div>
        <div class="stat"><span class="label">Total Used</span><span class="value warn" id="dash-used">--</span></div>
        <div class="stat"><span class="label">Tank Capacity</span><span class="value" id="dash-capacity">--</span></div>
      </div>
      <div class="row">
        <span class="title">Daily Tip</span>
        <span id="dash-tip" class="meta"></span>
      </div>
      <div>
        <h3>Recent Activity</h3>
        <div class="list" id="dash-recent"></div>
      </div>
    </section>

    <section data-view="transactions">
      <div class="view-header">
        <h2>Water Transactions</h2>
        <button class="speak-btn" type="button" data-speak="transactions" title="Read aloud">&#128266;</button>
      </div>
      <div class="cards">
        <div class="stat"><span class="label">Current Balance</span><span class="value" id="tx-balance">--</span></div>
        <div class="stat"><span class="label">Total Harvested</span><span class="value good" id="tx-harvested">--</span></div>
        <div class="stat"><span class="label">Total Used</span><span class="value warn" id="tx-used">--</span></div>
        <div class="stat"><span class="label">Manual Additions</span><span class="value" id="tx-manual">--</span></div>
      </div>
      <div class="filters" id="tx-filters"></div>
      <form class="panel" id="tx-form">
        <label>Type
          <select name="type" id="tx-type">
            <option value="harvested">Water Harvested</option>
            <option value="manual" selected>Manual Addition</option>
            <option value="usage">Water Usage</option>
            <option value="system">System Operation</option>
          </select>
        </label>
        <label>Amount (Liters)
          <input name="amount" type="number" required placeholder="Enter amount" />
        </label>
        <label>Date
          <input name="date" type="date" />
        </label>
        <label>Category
          <select name="category" id="tx-category"></select>
        </label>
        <label>Description
          <input name="description" required placeholder="Describe the transaction" />
        </label>
        <button class="btn" type="submit">Add Transaction</button>
      </form>
      <div class="list" id="tx-list"></div>
    </section>

    <section data-view="maintenance">
      <div class="view-header">
        <h2>Maintenance</h2>
        <button class="speak-btn" type="button" data-speak="maintenance" title="Read aloud">&#128266;</button>
      </div>
      <div class="cards">
        <div class="stat"><span class="label">Total Tasks</span><span class="value" id="task-total">--</span></div>
        <div class="stat"><span class="label">Pending</span><span class="value warn" id="task-pending">--</span></div>
        <div class="stat"><span class="label">Overdue</span><span class="value bad" id="task-overdue">--</span></div>
        <div class="stat"><span class="label">Completed</span><span class="value good" id="task-completed">--</span></div>
      </div>
      <div class="filters" id="task-filters"></div>
      <form class="panel" id="task-form">
        <label>Title
          <input name="title" required placeholder="Enter task title" />
        </label>
        <label>Due Date
          <input name="due_date" type="date" required />
        </label>
        <label>Priority
          <select name="priority">
            <option value="low">Low</option>
            <option value="medium" selected>Medium</option>
            <option value="high">High</option>
          </select>
        </label>
        <label>Frequency
          <input name="frequency" placeholder="e.g., Monthly" />
        </label>
        <label>Estimated Time
          <input name="estimated_time" placeholder="e.g., 2 hours" />
        </label>
        <label>Description
          <input name="description" placeholder="Describe the maintenance task" />
        </label>
        <button class="btn" type="submit">Add Task</button>
      </form>
      <div class="list" id="task-list"></div>
    </section>

    <section data-view="alerts">
      <div class="view-header">
        <h2>System Alerts</h2>
        <button class="speak-btn" type="button" data-speak="alerts" title="Read aloud">&#128266;</button>
      </div>
      <div class="cards">
        <div class="stat"><span class="label">Active</span><span class="value" id="alert-active">--</span></div>
        <div class="stat"><span class="label">Critical</span><span class="value bad" id="alert-critical">--</span></div>
        <div class="stat"><span class="label">Warnings</span><span class="value warn" id="alert-warnings">--</span></div>
        <div class="stat"><span class="label">Action Required</span><span class="value" id="alert-action">--</span></div>
      </div>
      <div class="filters" id="alert-filters"></div>
      <div class="list" id="alert-list"></div>
    </section>

    <section data-view="achievements">
      <div class="view-header">
        <h2>Achievements</h2>
        <button class="speak-btn" type="button" data-speak="achievements" title="Read aloud">&#128266;</button>
      </div>
      <div class="cards">
        <div class="stat"><span class="label">Unlocked</span><span class="value" id="ach-unlocked">--</span></div>
        <div class="stat"><span class="label">Total Points</span><span class="value good" id="ach-points">--</span></div>
        <div class="stat"><span class="label">Next Target</span><span class="value" id="ach-next">--</span></div>
        <div class="stat"><span class="label">Leaderboard</span><span class="value warn" id="ach-rank">--</span></div>
      </div>
      <div class="list" id="ach-list"></div>
      <div>
        <h3>Community Leaderboard</h3>
        <div class="list" id="leader-list"></div>
      </div>
    </section>

    <section data-view="learn">
      <div class="view-header">
        <h2>Learn &amp; Discover</h2>
        <button class="speak-btn" type="button" data-speak="learn" title="Read aloud">&#128266;</button>
      </div>
      <div>
        <h3>Children's Stories</h3>
        <div class="list" id="story-list"></div>
      </div>
      <div>
        <h3>Adult Guides</h3>
        <div class="list" id="guide-list"></div>
      </div>
    </section>
  </main>

  <div class="status" id="status"></div>

  <script>
    const CATEGORIES = {
      harvested: ['Natural Collection', 'Roof Collection', 'Other Collection'],
      manual: ['Manual Addition', 'Tank Filling', 'Emergency Supply'],
      usage: ['Irrigation', 'Domestic Use', 'Outdoor Use', 'Cleaning'],
      system: ['System Maintenance', 'Filter Cleaning', 'Pump Operation']
    };

    const speeches = {};
    let speaking = false;
    let statusTimer = null;

    const el = (id) => document.getElementById(id);

    const esc = (value) =>
      String(value).replace(/[&<>"]/g, (ch) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;' }[ch]));

    const notify = (message, kind) => {
      const status = el('status');
      status.textContent = message;
      status.className = 'status visible' + (kind === 'error' ? ' error' : '');
      clearTimeout(statusTimer);
      statusTimer = setTimeout(() => {
        status.className = 'status';
      }, 2500);
    };

    // Read-aloud capability: re-invocation cancels the in-flight utterance,
    // a second click stops, absence of the capability is a soft failure.
    const speak = (text) => {
      if (!('speechSynthesis' in window)) {
        notify('Voice feature is not supported in your browser.', 'error');
        return;
      }
      if (speaking) {
        window.speechSynthesis.cancel();
        speaking = false;
        return;
      }
      window.speechSynthesis.cancel();
      const utterance = new SpeechSynthesisUtterance(text);
      utterance.rate = 0.8;
      utterance.pitch = 1.1;
      utterance.onstart = () => { speaking = true; };
      utterance.onend = () => { speaking = false; };
      utterance.onerror = () => {
        speaking = false;
        notify('Sorry, voice feature is not available right now.', 'error');
      };
      window.speechSynthesis.speak(utterance);
    };

    document.querySelectorAll('.speak-btn').forEach((button) => {
      button.addEventListener('click', () => {
        const text = speeches[button.dataset.speak];
        if (text) speak(text);
      });
    });

    const getJson = async (url) => {
      const res = await fetch(url);
      if (!res.ok) throw new Error(await res.text() || 'Request failed');
      return res.json();
    };

    const postJson = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) throw new Error(await res.text() || 'Request failed');
      return res.json();
    };

    const renderFilters = (containerId, options, active, onPick) => {
      const container = el(containerId);
      container.innerHTML = '';
      options.forEach(({ value, label }) => {
        const button = document.createElement('button');
        button.type = 'button';
        button.className = 'filter-btn' + (value === active ? ' active' : '');
        button.textContent = label;
        button.addEventListener('click', () => onPick(value));
        container.appendChild(button);
      });
    };

    // Dashboard

    const loadDashboard = async () => {
      const data = await getJson('/api/dashboard');
      speeches.dashboard = data.speech;
      el('tank-gauge').style.setProperty('--level', data.tank_level_percent);
      el('tank-percent').textContent = data.tank_level_percent + '%';
      el('tank-liters').textContent = data.available_liters + ' L available';
      el('dash-harvested').textContent = '+' + data.total_harvested + 'L';
      el('dash-used').textContent = '-' + data.total_used + 'L';
      el('dash-capacity').textContent = data.tank_capacity + 'L';
      el('dash-tip').textContent = data.tip;
      el('dash-recent').innerHTML = data.recent.map((tx) => `
        <div class="row">
          <div class="top">
            <span class="title">${esc(tx.description)}</span>
            <span class="amount ${tx.amount >= 0 ? 'pos' : 'neg'}">${tx.amount > 0 ? '+' : ''}${tx.amount}L</span>
          </div>
          <span class="meta">${esc(tx.date)} &middot; ${esc(tx.category)}</span>
        </div>`).join('') || '<div class="empty">No activity yet.</div>';
    };

    // Transactions

    let txFilter = 'all';

    const loadTransactions = async () => {
      const data = await getJson('/api/transactions?filter=' + txFilter);
      speeches.transactions = data.speech;
      el('tx-balance').textContent = data.summary.current_balance + 'L';
      el('tx-harvested').textContent = '+' + data.summary.total_harvested + 'L';
      el('tx-used').textContent = '-' + data.summary.total_used + 'L';
      el('tx-manual').textContent = '+' + data.summary.total_manual + 'L';

      renderFilters('tx-filters', [
        { value: 'all', label: `All (${data.counts.all})` },
        { value: 'harvested', label: `Harvested (${data.counts.harvested})` },
        { value: 'usage', label: `Usage (${data.counts.usage})` },
        { value: 'manual', label: `Manual (${data.counts.manual})` }
      ], txFilter, (value) => { txFilter = value; loadTransactions().catch(onError); });

      el('tx-list').innerHTML = data.transactions.map((tx) => `
        <div class="row">
          <div class="top">
            <span class="title">${esc(tx.description)}</span>
            <span class="amount ${tx.amount >= 0 ? 'pos' : 'neg'}">${tx.amount > 0 ? '+' : ''}${tx.amount}L</span>
          </div>
          <span class="meta">${esc(tx.date)} &middot; <span class="badge info">${esc(tx.type)}</span> &middot; ${esc(tx.category)} &middot; balance ${tx.balance}L</span>
        </div>`).join('') || '<div class="empty">No transactions found for the selected filter.</div>';
    };

    const syncCategories = () => {
      const kind = el('tx-type').value;
      el('tx-category').innerHTML = CATEGORIES[kind]
        .map((category) => `<option value="${esc(category)}">${esc(category)}</option>`)
        .join('');
    };

    el('tx-type').addEventListener('change', syncCategories);
    syncCategories();

    el('tx-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      postJson('/api/transactions', {
        type: form.get('type'),
        amount: Number(form.get('amount')),
        date: form.get('date') || null,
        category: form.get('category'),
        description: form.get('description')
      }).then((result) => {
        notify(result.message);
        event.target.reset();
        syncCategories();
        return Promise.all([loadTransactions(), loadDashboard()]);
      }).catch(onError);
    });

    // Maintenance

    let taskFilter = 'all';

    const loadTasks = async () => {
      const data = await getJson('/api/tasks?filter=' + taskFilter);
      speeches.maintenance = data.speech;
      el('task-total').textContent = data.counts.total;
      el('task-pending').textContent = data.counts.pending;
      el('task-overdue').textContent = data.counts.overdue;
      el('task-completed').textContent = data.counts.completed;

      renderFilters('task-filters', [
        { value: 'all', label: `All Tasks (${data.counts.total})` },
        { value: 'pending', label: `Pending (${data.counts.pending})` },
        { value: 'overdue', label: `Overdue (${data.counts.overdue})` }
      ], taskFilter, (value) => { taskFilter = value; loadTasks().catch(onError); });

      el('task-list').innerHTML = data.tasks.map((task) => `
        <div class="row ${task.status === 'completed' ? 'dimmed' : ''}">
          <div class="top">
            <label style="display:flex;align-items:center;gap:8px;">
              <input type="checkbox" data-toggle="${esc(task.id)}" ${task.status === 'completed' ? 'checked' : ''} />
              <span class="title">${esc(task.title)}</span>
            </label>
            <span class="badge ${task.priority === 'high' ? 'error' : task.priority === 'medium' ? 'warning' : 'info'}">${esc(task.priority)}</span>
          </div>
          <span class="meta">${esc(task.description)}</span>
          <span class="meta">Due ${esc(task.due_date)} &middot; ${esc(task.frequency)} &middot; ${esc(task.estimated_time)}${task.last_completed ? ' &middot; last completed ' + esc(task.last_completed) : ''}</span>
          ${task.notes ? `<span class="meta"><strong>Notes:</strong> ${esc(task.notes)}</span>` : ''}
        </div>`).join('') || '<div class="empty">No tasks found.</div>';

      el('task-list').querySelectorAll('[data-toggle]').forEach((box) => {
        box.addEventListener('change', () => {
          postJson('/api/tasks/' + box.dataset.toggle + '/toggle')
            .then((result) => {
              notify(result.message);
              return loadTasks();
            })
            .catch(onError);
        });
      });
    };

    el('task-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      postJson('/api/tasks', {
        title: form.get('title'),
        description: form.get('description'),
        priority: form.get('priority'),
        due_date: form.get('due_date'),
        frequency: form.get('frequency'),
        estimated_time: form.get('estimated_time')
      }).then((result) => {
        notify(result.message);
        event.target.reset();
        return loadTasks();
      }).catch(onError);
    });

    // Alerts

    let alertFilter = 'active';

    const loadAlerts = async () => {
      const data = await getJson('/api/alerts?filter=' + alertFilter);
      speeches.alerts = data.speech;
      el('alert-active').textContent = data.counts.active;
      el('alert-critical').textContent = data.counts.critical;
      el('alert-warnings').textContent = data.counts.warnings;
      el('alert-action').textContent = data.counts.action_required;

      renderFilters('alert-filters', [
        { value: 'all', label: `All Alerts (${data.counts.total})` },
        { value: 'active', label: `Active (${data.counts.active})` },
        { value: 'action_required', label: `Action Required (${data.counts.action_required})` }
      ], alertFilter, (value) => { alertFilter = value; loadAlerts().catch(onError); });

      el('alert-list').innerHTML = data.alerts.map((alert) => `
        <div class="row ${alert.dismissed ? 'dimmed' : ''}">
          <div class="top">
            <span class="title">${esc(alert.title)}</span>
            <span>
              <span class="badge ${esc(alert.severity)}">${esc(alert.severity)}</span>
              ${alert.action_required ? '<span class="badge warning">Action Required</span>' : ''}
              ${alert.dismissed ? '' : `<button class="btn ghost" type="button" data-dismiss="${esc(alert.id)}">Dismiss</button>`}
            </span>
          </div>
          <span class="meta">${esc(alert.timestamp)}</span>
          <span>${esc(alert.message)}</span>
        </div>`).join('') || '<div class="empty">All alerts have been addressed!</div>';

      el('alert-list').querySelectorAll('[data-dismiss]').forEach((button) => {
        button.addEventListener('click', () => {
          postJson('/api/alerts/' + button.dataset.dismiss + '/dismiss')
            .then((result) => {
              notify(result.message);
              return loadAlerts();
            })
            .catch(onError);
        });
      });
    };

    // Achievements

    const loadAchievements = async () => {
      const data = await getJson('/api/achievements');
      speeches.achievements = data.speech;
      el('ach-unlocked').textContent = data.unlocked_count + ' / ' + data.achievements.length;
      el('ach-points').textContent = data.total_points;
      el('ach-next').textContent = data.next_target ? data.next_target.title : 'All done';
      const you = data.leaderboard.find((entry) => entry.name.startsWith('You'));
      el('ach-rank').textContent = you ? '#' + you.rank : '--';

      el('ach-list').innerHTML = data.achievements.map((a) => `
        <div class="row ${a.unlocked ? '' : 'dimmed'}">
          <div class="top">
            <span class="title">${esc(a.icon)} ${esc(a.title)}</span>
            <span class="badge ${a.unlocked ? 'success' : 'info'}">${a.unlocked ? '+' + a.points + ' pts' : a.progress + '%'}</span>
          </div>
          <span class="meta">${esc(a.description)}${a.unlocked && a.date ? ' &middot; unlocked ' + esc(a.date) : ''}</span>
          ${a.unlocked ? '' : `<div class="progress"><span style="width:${a.progress}%"></span></div>`}
        </div>`).join('');

      el('leader-list').innerHTML = data.leaderboard.map((entry) => `
        <div class="row">
          <div class="top">
            <span class="title">${esc(entry.badge)} #${entry.rank} ${esc(entry.name)}</span>
            <span class="badge ${entry.name.startsWith('You') ? 'warning' : 'info'}">${entry.points} pts</span>
          </div>
          <span class="meta">${esc(entry.water_saved)} saved</span>
        </div>`).join('');
    };

    // Learn

    const loadLearn = async () => {
      const data = await getJson('/api/learn');
      speeches.learn = data.speech;

      el('story-list').innerHTML = data.stories.map((story, ix) => `
        <div class="row">
          <div class="top">
            <span class="title">${esc(story.title)}</span>
            <span>
              <span class="badge info">${esc(story.difficulty)}</span>
              <button class="speak-btn" type="button" data-story="${ix}" title="Read aloud">&#128266;</button>
            </span>
          </div>
          <span>${esc(story.content)}</span>
          <span>${esc(story.full_story)}</span>
          <span class="meta"><strong>Lesson:</strong> ${esc(story.lesson)}</span>
        </div>`).join('');

      el('guide-list').innerHTML = data.guides.map((guide, ix) => `
        <div class="row">
          <div class="top">
            <span class="title">${esc(guide.title)}</span>
            <span>
              <span class="badge info">${esc(guide.difficulty)}</span>
              <button class="speak-btn" type="button" data-guide="${ix}" title="Read aloud">&#128266;</button>
            </span>
          </div>
          <span>${esc(guide.content)}</span>
          <ol>${guide.steps.map((step) => `<li class="meta">${esc(step)}</li>`).join('')}</ol>
          <span class="meta"><strong>Tip:</strong> ${esc(guide.tips)}</span>
        </div>`).join('');

      el('story-list').querySelectorAll('[data-story]').forEach((button) => {
        button.addEventListener('click', () => {
          const story = data.stories[Number(button.dataset.story)];
          speak(`${story.title}. ${story.full_story} ${story.lesson}`);
        });
      });

      el('guide-list').querySelectorAll('[data-guide]').forEach((button) => {
        button.addEventListener('click', () => {
          const guide = data.guides[Number(button.dataset.guide)];
          speak(`${guide.title}. ${guide.content} Key steps include: ${guide.steps.join(', ')}`);
        });
      });
    };

    // Tabs

    const tabs = Array.from(document.querySelectorAll('.tab'));
    const views = Array.from(document.querySelectorAll('section[data-view]'));

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        tabs.forEach((tab) => tab.classList.toggle('active', tab === button));
        views.forEach((view) =>
          view.classList.toggle('active', view.dataset.view === button.dataset.tab));
      });
    });

    const onError = (err) => notify(err.message, 'error');

    Promise.all([
      loadDashboard(),
      loadTransactions(),
      loadTasks(),
      loadAlerts(),
      loadAchievements(),
      loadLearn()
    ]).catch(onError);
  </script>
</body>
</html>
"#;
