pub fn index_page() -> String {
    r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Budget Assistant</title>
    <style>
        body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
        #log { white-space: pre-wrap; border: 1px solid #ccc; padding: 1rem; min-height: 12rem; }
        form { display: flex; gap: 0.5rem; margin-top: 1rem; }
        input { flex: 1; }
    </style>
</head>
<body>
    <h1>Budget Assistant</h1>
    <p>Type <code>help</code> to see the available commands.</p>
    <div id="log"></div>
    <form id="chat">
        <input id="message" autocomplete="off" placeholder="add expense 12.50 lunch">
        <button type="submit">Send</button>
    </form>
    <script>
        const log = document.getElementById("log");
        document.getElementById("chat").addEventListener("submit", async (event) => {
            event.preventDefault();
            const input = document.getElementById("message");
            const message = input.value;
            input.value = "";
            log.textContent += "> " + message + "\n";
            const res = await fetch("/chat", {
                method: "POST",
                headers: { "Content-Type": "application/json" },
                body: JSON.stringify({ message }),
            });
            const body = await res.json();
            log.textContent += (body.response ?? body.error) + "\n\n";
        });
    </script>
</body>
</html>
"##
    .to_string()
}
