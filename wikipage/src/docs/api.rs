/*!
# Wikipage API documentation

This page describes the API endpoints available on Wikipage.

## Page lookup

Endpoint: `/wikipage`

Example: `/wikipage?q=USA`

Looks up the Wikipedia page with the given title and responds with a short
summary of it. If Wikipedia reports that the title redirects to another page,
the redirect is followed once, and the summary describes the target page.

This endpoint accepts GET requests and takes parameters as query string values.

### Query Parameters

- `q` - The title to look up. Required.

### Response

On success, the response is a JSON object with the following keys:

- `pageId` - Wikipedia's numeric identifier for the page.
- `title` - The title of the page. For a redirected lookup, this is the title of
  the page that was redirected to, not the value of `q`.
- `summary` - The plain text introduction of the page.
- `url` - The canonical URL of the page on Wikipedia.

```json
{
  "pageId": 3434750,
  "title": "United States",
  "summary": "The United States of America (USA) is a country primarily located in North America. ...",
  "url": "https://en.wikipedia.org/wiki/United_States"
}
```

### Errors

Errors are reported with a plain text body describing the error.

- `400` - `q` was missing or empty. The body is `q param is missing`.
- `500` - The lookup failed. This includes titles that have no page, in which
  case the body is `no page found`, as well as Wikipedia being unreachable or
  responding with an unexpected shape.

## Dockerflow

These endpoints support [Dockerflow][].

[Dockerflow]: https://github.com/mozilla-services/Dockerflow

- `/__heartbeat__` - A JSON object describing the state of the service.
- `/__lbheartbeat__` - An empty `200` response, for load balancers.
- `/__version__` - The contents of `version.json`, describing the deployed build.
- `/__error__` - Always responds with a `500`, to test error reporting.

## Other endpoints

- `/` - Redirects to `public_documentation` if it is configured, otherwise a
  short description of the service.
- `/debug/settings` - The loaded settings as JSON, only if the `debug` setting is
  enabled. Otherwise a `404`.
*/
