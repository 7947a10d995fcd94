use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shoplist::{
  bought_view,
  codec,
  unbought_view,
  ItemDraft,
  ListStore,
  MemoryStorage,
  Priority,
  ShoppingList,
  Summary,
};
use std::sync::Arc;
use tokio::runtime::Runtime; // To run async code within Criterion

// --- Helper: a persisted list of `len` items, every third one bought ---
fn build_list(rt: &Runtime, len: usize) -> ShoppingList {
  rt.block_on(async {
    let store = ListStore::new(MemoryStorage::new());
    for i in 0..len {
      let priority = Priority::ALL[i % Priority::ALL.len()];
      let list = store
        .add(ItemDraft::new(format!("item-{}", i), (i % 7 + 1) as i64, priority))
        .await
        .unwrap();
      if i % 3 == 0 {
        let id = list.last().unwrap().id.clone();
        store.toggle_bought(&id).await.unwrap();
      }
    }
    store.snapshot()
  })
}

// --- Benchmark Functions ---

fn bench_projections(c: &mut Criterion) {
  let mut group = c.benchmark_group("Projections");
  let rt = Runtime::new().unwrap();

  for len in [10, 100, 1000].iter() {
    let list = build_list(&rt, *len);
    group.throughput(Throughput::Elements(*len as u64));
    group.bench_with_input(BenchmarkId::new("views", len), &list, |b, list| {
      b.iter(|| {
        criterion::black_box(unbought_view(list).len());
        criterion::black_box(bought_view(list).len());
      });
    });
    group.bench_with_input(BenchmarkId::new("summary", len), &list, |b, list| {
      b.iter(|| criterion::black_box(Summary::of_bought(list)));
    });
  }
  group.finish();
}

fn bench_codec(c: &mut Criterion) {
  let mut group = c.benchmark_group("Codec");
  let rt = Runtime::new().unwrap();

  for len in [10, 100, 1000].iter() {
    let list = build_list(&rt, *len);
    let blob = codec::encode("bench", &list).unwrap();
    group.throughput(Throughput::Bytes(blob.len() as u64));
    group.bench_with_input(BenchmarkId::new("encode", len), &list, |b, list| {
      b.iter(|| criterion::black_box(codec::encode("bench", list).unwrap()));
    });
    group.bench_with_input(BenchmarkId::new("decode", len), &blob, |b, blob| {
      b.iter(|| criterion::black_box(codec::decode("bench", blob).unwrap()));
    });
  }
  group.finish();
}

// Full commit path: copy, mutate, encode, write, publish.
fn bench_toggle_commit(c: &mut Criterion) {
  let mut group = c.benchmark_group("Commit");
  let rt = Runtime::new().unwrap();

  for len in [10, 100, 1000].iter() {
    let list = build_list(&rt, *len);
    let store = Arc::new(ListStore::new(MemoryStorage::new()));
    rt.block_on(store.save(list.clone())).unwrap();
    let id = list.items()[0].id.clone();

    group.throughput(Throughput::Elements(1)); // 1 committed mutation
    group.bench_with_input(BenchmarkId::new("toggle_bought", len), len, |b, _| {
      b.to_async(&rt).iter(|| {
        let store = store.clone();
        let id = id.clone();
        async move { store.toggle_bought(&id).await.unwrap() }
      });
    });
  }
  group.finish();
}

criterion_group!(benches, bench_projections, bench_codec, bench_toggle_commit);
criterion_main!(benches);
