/// Movie picker page: a dropdown of catalog titles and a button that renders
/// up to five recommendation columns (title + poster).
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Movie Recommender System</title>
<style>
  body { font-family: sans-serif; max-width: 1100px; margin: 2rem auto; padding: 0 1rem; }
  select { min-width: 320px; padding: 0.4rem; }
  button { padding: 0.4rem 1rem; margin-left: 0.5rem; }
  #results { display: grid; grid-template-columns: repeat(5, 1fr); gap: 1rem; margin-top: 2rem; }
  #results figure { margin: 0; }
  #results img { width: 100%; border-radius: 4px; }
  #error { color: #b00020; margin-top: 1rem; }
</style>
</head>
<body>
<h1>Movie Recommender System</h1>
<label for="movie">Select a movie to get recommendations:</label>
<div>
  <select id="movie"></select>
  <button id="show">Show Recommendation</button>
</div>
<div id="error"></div>
<div id="results"></div>
<script>
const select = document.getElementById("movie");
const results = document.getElementById("results");
const errorBox = document.getElementById("error");

async function loadTitles() {
  const response = await fetch("/api/v1/movies");
  const body = await response.json();
  for (const title of body.titles) {
    const option = document.createElement("option");
    option.value = title;
    option.textContent = title;
    select.appendChild(option);
  }
}

async function showRecommendations() {
  results.replaceChildren();
  errorBox.textContent = "";
  const response = await fetch("/api/v1/recommendations?title=" + encodeURIComponent(select.value));
  const body = await response.json();
  if (!response.ok) {
    errorBox.textContent = body.error;
    return;
  }
  for (const movie of body.movies) {
    const figure = document.createElement("figure");
    const caption = document.createElement("figcaption");
    caption.textContent = movie.title;
    const img = document.createElement("img");
    img.src = movie.poster_url;
    img.alt = movie.title;
    figure.appendChild(caption);
    figure.appendChild(img);
    results.appendChild(figure);
  }
}

document.getElementById("show").addEventListener("click", showRecommendations);
loadTitles();
</script>
</body>
</html>
"#;
